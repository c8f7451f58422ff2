//! Mosaic rendering
//!
//! This module contains:
//! - The renderer that drives partitioning, aggregation and filling
//! - Scan-line polygon rasterization for hexagon footprints

/// Scan-line polygon rasterization
pub mod fill;
/// Mosaic orchestration and parameters
pub mod mosaic;

pub use mosaic::{MosaicParameters, MosaicRenderer, render_hexagonal, render_square};
