//! Jittered square-block partitioning
//!
//! Rows are scanned top-to-bottom and blocks left-to-right. Every row height
//! and every block width is drawn uniformly from `[ceil(0.9 * b), b]` and
//! clamped to the space left in the raster, so the emitted rectangles cover
//! the raster exactly without overlap while avoiding a perfectly uniform grid.

use crate::io::configuration::{JITTER_DENOMINATOR, JITTER_NUMERATOR};
use crate::io::error::{Result, invalid_parameter};
use crate::partition::region::Rect;
use rand::Rng;
use std::ops::RangeInclusive;

/// Inclusive range of extents a block of nominal size `block_size` may take
///
/// The lower bound is `ceil(block_size * 0.9)` computed in integers wide
/// enough that no block size overflows.
pub const fn jitter_range(block_size: usize) -> RangeInclusive<usize> {
    let scaled = block_size as u128 * JITTER_NUMERATOR as u128;
    let min = scaled.div_ceil(JITTER_DENOMINATOR as u128) as usize;
    min..=block_size
}

/// Validate a nominal region size
///
/// # Errors
///
/// Returns `InvalidParameter` if `size` is zero
pub fn validate_region_size(parameter: &'static str, size: usize) -> Result<usize> {
    if size == 0 {
        return Err(invalid_parameter(parameter, &size, &"must be at least 1"));
    }
    Ok(size)
}

/// Lazy sequence of non-overlapping rectangles exactly covering a raster
///
/// The random source is borrowed so callers can fix a seed and reproduce
/// every region boundary.
pub struct JitteredBlocks<'a, R: Rng + ?Sized> {
    width: usize,
    height: usize,
    extents: RangeInclusive<usize>,
    rng: &'a mut R,
    cursor_x: usize,
    cursor_y: usize,
    row_height: usize,
}

impl<'a, R: Rng + ?Sized> JitteredBlocks<'a, R> {
    /// Create a partitioner for a `width x height` raster
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `block_size` is zero
    pub fn new(width: usize, height: usize, block_size: usize, rng: &'a mut R) -> Result<Self> {
        let block_size = validate_region_size("block_size", block_size)?;
        Ok(Self {
            width,
            height,
            extents: jitter_range(block_size),
            rng,
            cursor_x: 0,
            cursor_y: 0,
            row_height: 0,
        })
    }

    fn draw_extent(&mut self) -> usize {
        self.rng.random_range(self.extents.clone())
    }
}

impl<R: Rng + ?Sized> Iterator for JitteredBlocks<'_, R> {
    type Item = Rect;

    fn next(&mut self) -> Option<Rect> {
        if self.width == 0 || self.cursor_y >= self.height {
            return None;
        }

        if self.cursor_x == 0 {
            self.row_height = self.draw_extent().min(self.height - self.cursor_y);
        }

        let block_width = self.draw_extent().min(self.width - self.cursor_x);
        let rect = Rect::new(self.cursor_x, self.cursor_y, block_width, self.row_height);

        self.cursor_x += block_width;
        if self.cursor_x >= self.width {
            self.cursor_x = 0;
            self.cursor_y += self.row_height;
        }

        Some(rect)
    }
}
