//! Color sampling strategies for hexagon cells
//!
//! `Center` reads the single pixel under the floored cell center and skips the
//! cell when that pixel lies outside the raster. It ignores everything else
//! inside the hexagon. `AreaAverage` averages every source pixel whose center
//! falls inside the hexagon at proportionally higher cost.

use crate::aggregate::median::ColorSample;
use crate::io::error::Result;
use crate::partition::region::HexCell;
use crate::raster::{Raster, Rgb};
use crate::render::fill::polygon_spans;
use std::fmt;

/// How a hexagon cell's fill color is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexSampling {
    /// Color of the pixel under the floored cell center
    #[default]
    Center,
    /// Rounded per-channel mean over the cell's footprint
    AreaAverage,
}

impl HexSampling {
    /// Compute the fill color of a cell, or `None` when the cell is skipped
    ///
    /// # Errors
    ///
    /// Returns `PixelAccess` if a footprint read reaches outside the raster
    pub fn sample(self, source: &Raster, cell: &HexCell) -> Result<Option<Rgb>> {
        match self {
            Self::Center => Ok(center_sample(source, cell)),
            Self::AreaAverage => area_average(source, cell),
        }
    }
}

impl fmt::Display for HexSampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Center => write!(f, "center"),
            Self::AreaAverage => write!(f, "area"),
        }
    }
}

/// Color of the pixel under the floored cell center
pub fn center_sample(source: &Raster, cell: &HexCell) -> Option<Rgb> {
    let (x, y) = cell.sample_point(source.width(), source.height())?;
    source.rgb_at(x, y)
}

/// Rounded per-channel mean over the source pixels inside the cell
///
/// # Errors
///
/// Returns `PixelAccess` if a footprint read reaches outside the raster
pub fn area_average(source: &Raster, cell: &HexCell) -> Result<Option<Rgb>> {
    let mut sample = ColorSample::new();
    for span in polygon_spans(&cell.vertices(), source.width(), source.height()) {
        source.read_span(span.y, span.x_start, span.x_end, &mut sample)?;
    }
    Ok(sample.mean())
}
