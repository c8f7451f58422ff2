//! In-memory RGBA raster and color types
//!
//! This module contains:
//! - The owned row-major RGBA buffer used as mosaic input and output
//! - The opaque fill color produced by aggregation

/// Owned RGBA pixel buffer with bounds-checked region access
pub mod buffer;
/// Opaque RGB fill color
pub mod color;

pub use buffer::Raster;
pub use color::Rgb;
