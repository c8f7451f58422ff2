//! Pixel-block mosaic filters for raster images
//!
//! Two spatial-aggregation filters are provided: a square-block mosaic whose
//! block extents are jittered around the requested size and filled with the
//! per-channel median of their pixels, and a hexagonal-tile mosaic that fills
//! each hexagon of a pointy-top grid with a sampled color.

#![forbid(unsafe_code)]

/// Representative color computation for regions
pub mod aggregate;
/// Input/output operations, session state and error handling
pub mod io;
/// Region enumeration for square and hexagonal tilings
pub mod partition;
/// In-memory RGBA raster buffer
pub mod raster;
/// Mosaic orchestration and footprint painting
pub mod render;

pub use io::error::{MosaicError, Result};
pub use raster::{Raster, Rgb};
pub use render::mosaic::{MosaicParameters, MosaicRenderer};
