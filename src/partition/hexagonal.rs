//! Pointy-top hexagonal grid enumeration
//!
//! Cells are laid out with a horizontal pitch of `sqrt(3) * r` and a row pitch
//! of `1.5 * r`; odd rows shift right by half a cell. Enumeration continues one
//! radius past the right and bottom edges so partially visible cells are kept.

use crate::io::error::Result;
use crate::partition::jitter::validate_region_size;
use crate::partition::region::HexCell;

/// Lazy sequence of hexagon cells covering a raster
#[derive(Debug, Clone)]
pub struct HexGrid {
    radius: f64,
    hex_width: f64,
    row_spacing: f64,
    x_limit: f64,
    y_limit: f64,
    row: usize,
    col: usize,
}

impl HexGrid {
    /// Create a grid for a `width x height` raster
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `hex_radius` is zero
    pub fn new(width: usize, height: usize, hex_radius: usize) -> Result<Self> {
        let radius = validate_region_size("hex_radius", hex_radius)? as f64;
        let hex_height = 2.0 * radius;
        Ok(Self {
            radius,
            hex_width: 3.0_f64.sqrt() * radius,
            row_spacing: hex_height * 0.75,
            x_limit: width as f64 + radius,
            y_limit: height as f64 + radius,
            row: 0,
            col: 0,
        })
    }

    /// Horizontal distance between neighbouring centers in a row
    pub const fn hex_width(&self) -> f64 {
        self.hex_width
    }

    /// Vertical distance between rows
    pub const fn row_spacing(&self) -> f64 {
        self.row_spacing
    }

    fn row_offset(&self, row: usize) -> f64 {
        if row % 2 == 1 {
            self.hex_width / 2.0
        } else {
            0.0
        }
    }
}

impl Iterator for HexGrid {
    type Item = HexCell;

    fn next(&mut self) -> Option<HexCell> {
        loop {
            let y = self.row as f64 * self.row_spacing;
            if y > self.y_limit {
                return None;
            }

            let x = (self.col as f64).mul_add(self.hex_width, self.row_offset(self.row));
            if x > self.x_limit {
                self.row += 1;
                self.col = 0;
                continue;
            }

            let cell = HexCell {
                row: self.row,
                col: self.col,
                center: (x, y),
                radius: self.radius,
            };
            self.col += 1;
            return Some(cell);
        }
    }
}
