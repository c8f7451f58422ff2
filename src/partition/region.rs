//! Region footprints emitted by the partitioners
//!
//! Square mode emits axis-aligned rectangles that tile the raster exactly.
//! Hex mode emits hexagon cells; neighbouring cells approximately tile the
//! plane and are painted independently, so seams may overlap or leave gaps.

use std::f64::consts::PI;

/// Axis-aligned rectangle in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge (inclusive)
    pub x: usize,
    /// Top edge (inclusive)
    pub y: usize,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

impl Rect {
    /// Create a rectangle from its top-left corner and extent
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive)
    pub const fn right(&self) -> usize {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive)
    pub const fn bottom(&self) -> usize {
        self.y.saturating_add(self.height)
    }

    /// Number of pixels covered
    pub const fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Check if a pixel lies inside the rectangle
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// One cell of a pointy-top hexagonal grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexCell {
    /// Grid row index
    pub row: usize,
    /// Grid column index within the row
    pub col: usize,
    /// Center position in pixel coordinates (x, y)
    pub center: (f64, f64),
    /// Circumradius (center to vertex distance)
    pub radius: f64,
}

impl HexCell {
    /// The six polygon vertices at angles `60 * i - 30` degrees
    pub fn vertices(&self) -> [(f64, f64); 6] {
        let (cx, cy) = self.center;
        std::array::from_fn(|i| {
            let angle = PI / 180.0 * (60.0 * i as f64 - 30.0);
            (
                self.radius.mul_add(angle.cos(), cx),
                self.radius.mul_add(angle.sin(), cy),
            )
        })
    }

    /// The center floored to integer pixel coordinates
    ///
    /// Returns `None` when the floored center falls outside a `width x height`
    /// raster.
    pub fn sample_point(&self, width: usize, height: usize) -> Option<(usize, usize)> {
        let (cx, cy) = self.center;
        let x = cx.floor();
        let y = cy.floor();
        if x < 0.0 || y < 0.0 || x >= width as f64 || y >= height as f64 {
            return None;
        }
        Some((x as usize, y as usize))
    }

    /// Even-odd point-in-polygon test against the hexagon outline
    pub fn contains(&self, point: (f64, f64)) -> bool {
        polygon_contains(&self.vertices(), point)
    }
}

/// Even-odd crossing test for an arbitrary simple polygon
pub fn polygon_contains(vertices: &[(f64, f64)], point: (f64, f64)) -> bool {
    let (px, py) = point;
    let mut inside = false;
    let mut previous = match vertices.last() {
        Some(&v) => v,
        None => return false,
    };
    for &current in vertices {
        let (x0, y0) = previous;
        let (x1, y1) = current;
        if (y0 > py) != (y1 > py) {
            let crossing = (x1 - x0).mul_add((py - y0) / (y1 - y0), x0);
            if px < crossing {
                inside = !inside;
            }
        }
        previous = current;
    }
    inside
}
