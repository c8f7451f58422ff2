//! Mosaic orchestration: partition, aggregate, fill
//!
//! Square mode repaints every output pixel because its rectangles cover the
//! raster exactly. Hex mode only paints hexagon footprints; pixels reached by
//! no hexagon keep the transparent background of the fresh output raster.

use crate::aggregate::sampling::HexSampling;
use crate::io::configuration::DEFAULT_BLOCK_SIZE;
use crate::io::error::Result;
use crate::partition::hexagonal::HexGrid;
use crate::partition::jitter::{JitteredBlocks, validate_region_size};
use crate::raster::Raster;
use crate::render::fill::fill_polygon;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Tiling strategy and its size parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MosaicParameters {
    /// Jittered square blocks filled with their per-channel median
    Square {
        /// Nominal block side length in pixels
        block_size: usize,
    },
    /// Pointy-top hexagon cells filled with a sampled color
    Hexagonal {
        /// Hexagon circumradius in pixels
        hex_radius: usize,
        /// How each cell's color is chosen
        sampling: HexSampling,
    },
}

impl MosaicParameters {
    /// Square-block parameters
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `block_size` is zero
    pub fn square(block_size: usize) -> Result<Self> {
        Ok(Self::Square {
            block_size: validate_region_size("block_size", block_size)?,
        })
    }

    /// Hexagonal parameters with the given sampling strategy
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `hex_radius` is zero
    pub fn hexagonal(hex_radius: usize, sampling: HexSampling) -> Result<Self> {
        Ok(Self::Hexagonal {
            hex_radius: validate_region_size("hex_radius", hex_radius)?,
            sampling,
        })
    }
}

impl Default for MosaicParameters {
    fn default() -> Self {
        Self::Square {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl fmt::Display for MosaicParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Square { block_size } => write!(f, "square (block size {block_size})"),
            Self::Hexagonal {
                hex_radius,
                sampling,
            } => write!(f, "hexagonal (radius {hex_radius}, {sampling} sampling)"),
        }
    }
}

/// Renders mosaics with an owned random source for block jitter
pub struct MosaicRenderer<R: Rng = StdRng> {
    rng: R,
}

impl MosaicRenderer<StdRng> {
    /// Create a renderer seeded from the operating system
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create a deterministic renderer
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for MosaicRenderer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MosaicRenderer<R> {
    /// Create a renderer drawing jitter from `rng`
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Produce a mosaic of `source` as a new raster of the same dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for unusable sizes and `PixelAccess` if a
    /// region read or fill fails; no partial output is returned
    pub fn render(&mut self, source: &Raster, params: &MosaicParameters) -> Result<Raster> {
        match *params {
            MosaicParameters::Square { block_size } => {
                render_square(source, block_size, &mut self.rng)
            }
            MosaicParameters::Hexagonal {
                hex_radius,
                sampling,
            } => render_hexagonal(source, hex_radius, sampling),
        }
    }
}

/// Jittered square-block mosaic filled with per-channel medians
///
/// # Errors
///
/// Returns `InvalidParameter` for an unusable `block_size` and `PixelAccess`
/// if a region read or fill fails
pub fn render_square<R: Rng + ?Sized>(
    source: &Raster,
    block_size: usize,
    rng: &mut R,
) -> Result<Raster> {
    let (width, height) = source.dimensions();
    let mut output = Raster::new(width, height)?;
    let mut painted = 0usize;

    for rect in JitteredBlocks::new(width, height, block_size, rng)? {
        let Some(color) = source.read_region(&rect)?.median() else {
            trace!("Skipping empty region {rect:?}");
            continue;
        };
        output.fill_rect(&rect, color)?;
        painted += 1;
    }

    debug!("Square mosaic {width}x{height} (block size {block_size}): {painted} regions");
    Ok(output)
}

/// Hexagonal mosaic filled according to `sampling`
///
/// # Errors
///
/// Returns `InvalidParameter` for an unusable `hex_radius` and `PixelAccess`
/// if a footprint read or fill fails
pub fn render_hexagonal(
    source: &Raster,
    hex_radius: usize,
    sampling: HexSampling,
) -> Result<Raster> {
    let (width, height) = source.dimensions();
    let mut output = Raster::new(width, height)?;
    let mut painted = 0usize;
    let mut skipped = 0usize;

    for cell in HexGrid::new(width, height, hex_radius)? {
        let Some(color) = sampling.sample(source, &cell)? else {
            trace!("Skipping hexagon at row {} col {}", cell.row, cell.col);
            skipped += 1;
            continue;
        };
        fill_polygon(&mut output, &cell.vertices(), color)?;
        painted += 1;
    }

    debug!(
        "Hexagonal mosaic {width}x{height} (radius {hex_radius}, {sampling}): \
         {painted} cells painted, {skipped} skipped"
    );
    Ok(output)
}
