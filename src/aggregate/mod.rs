//! Representative color computation for regions

/// Per-channel median aggregation over region samples
pub mod median;
/// Single-sample and area-average strategies for hexagon cells
pub mod sampling;

pub use median::{ColorSample, median_of_sorted};
pub use sampling::HexSampling;
