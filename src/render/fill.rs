//! Scan-line polygon rasterization
//!
//! A pixel `(px, py)` belongs to a polygon when its center `(px + 0.5, py + 0.5)`
//! is inside under the even-odd rule. Spans are clipped to the raster, so
//! polygons hanging over an edge only produce their visible part.

use crate::io::error::Result;
use crate::raster::{Raster, Rgb};

/// Horizontal run of pixels `[x_start, x_end)` on row `y`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Row index
    pub y: usize,
    /// First pixel (inclusive)
    pub x_start: usize,
    /// Last pixel (exclusive)
    pub x_end: usize,
}

impl Span {
    /// Number of pixels in the span
    pub const fn len(&self) -> usize {
        self.x_end.saturating_sub(self.x_start)
    }

    /// Check if the span covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Pixel spans covered by a polygon inside a `width x height` raster
///
/// Rows are visited top to bottom; spans within a row are ordered left to
/// right and never overlap.
pub fn polygon_spans(vertices: &[(f64, f64)], width: usize, height: usize) -> Vec<Span> {
    let mut spans = Vec::new();
    if vertices.len() < 3 || width == 0 || height == 0 {
        return spans;
    }

    let (min_y, max_y) = vertices
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
            (lo.min(y), hi.max(y))
        });
    let first_row = clamp_index((min_y - 0.5).ceil(), height);
    let last_row = clamp_index((max_y - 0.5).ceil(), height);

    let mut crossings = Vec::with_capacity(vertices.len());
    for row in first_row..last_row {
        let scan_y = row as f64 + 0.5;
        crossings.clear();

        let mut previous = vertices.len() - 1;
        for (current, &(x1, y1)) in vertices.iter().enumerate() {
            if let Some(&(x0, y0)) = vertices.get(previous) {
                if (y0 > scan_y) != (y1 > scan_y) {
                    crossings.push((x1 - x0).mul_add((scan_y - y0) / (y1 - y0), x0));
                }
            }
            previous = current;
        }
        crossings.sort_by(f64::total_cmp);

        for pair in crossings.chunks_exact(2) {
            if let [left, right] = *pair {
                let x_start = clamp_index((left - 0.5).ceil(), width);
                let x_end = clamp_index((right - 0.5).ceil(), width);
                if x_start < x_end {
                    spans.push(Span {
                        y: row,
                        x_start,
                        x_end,
                    });
                }
            }
        }
    }
    spans
}

/// Paint a polygon's footprint with an opaque color
///
/// # Errors
///
/// Returns `PixelAccess` if a span reaches outside the raster
pub fn fill_polygon(raster: &mut Raster, vertices: &[(f64, f64)], color: Rgb) -> Result<usize> {
    let mut painted = 0;
    for span in polygon_spans(vertices, raster.width(), raster.height()) {
        raster.fill_span(span.y, span.x_start, span.x_end, color)?;
        painted += span.len();
    }
    Ok(painted)
}

// Maps a (possibly negative or oversized) float index onto [0, limit]
fn clamp_index(value: f64, limit: usize) -> usize {
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= limit as f64 {
        limit
    } else {
        value as usize
    }
}
