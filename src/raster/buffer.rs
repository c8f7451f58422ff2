//! Row-major RGBA raster buffer
//!
//! Pixels are stored as a flat `width * height * 4` byte array with a top-left
//! origin. Region reads and fills are bounds-checked against the whole region
//! so a failure never leaves a partially touched footprint behind.

use crate::aggregate::median::ColorSample;
use crate::io::configuration::CHANNELS;
use crate::io::error::{MosaicError, Result, invalid_raster};
use crate::partition::region::Rect;
use crate::raster::color::Rgb;
use image::RgbaImage;

/// Owned RGBA pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Create a fully transparent raster
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer size overflows `usize`
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wrap an existing RGBA byte buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer length is not `width * height * 4` or that
    /// product overflows `usize`
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let len = checked_len(width, height)?;
        if data.len() != len {
            return Err(invalid_raster(&format!(
                "{width}x{height} raster needs {len} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a raster with every pixel set to the same RGBA value
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer size overflows `usize`
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Result<Self> {
        let len = checked_len(width, height)?;
        let data = rgba.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Copy pixels out of a decoded image
    ///
    /// # Errors
    ///
    /// Returns an error if the pixel data does not match the image dimensions
    pub fn from_rgba_image(img: &RgbaImage) -> Result<Self> {
        Self::from_raw(
            img.width() as usize,
            img.height() as usize,
            img.as_raw().clone(),
        )
    }

    /// Convert into an `image` buffer for encoding
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions do not fit the image crate's `u32` sizes
    pub fn into_rgba_image(self) -> Result<RgbaImage> {
        let width = u32::try_from(self.width).map_err(|e| invalid_raster(&e))?;
        let height = u32::try_from(self.height).map_err(|e| invalid_raster(&e))?;
        RgbaImage::from_raw(width, height, self.data)
            .ok_or_else(|| invalid_raster(&"buffer does not match image dimensions"))
    }

    /// Raster width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Raster dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Raw channel bytes in row-major RGBA order
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the raster and return its channel bytes
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// RGBA value at a pixel, or `None` outside the raster
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        let offset = self.offset(x, y)?;
        let channels = self.data.get(offset..offset + CHANNELS)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(channels);
        Some(rgba)
    }

    /// RGB value at a pixel, or `None` outside the raster
    pub fn rgb_at(&self, x: usize, y: usize) -> Option<Rgb> {
        self.pixel(x, y).map(Rgb::from_rgba)
    }

    /// Collect the RGB channels of every pixel inside a rectangle
    ///
    /// # Errors
    ///
    /// Returns `PixelAccess` if any part of the rectangle lies outside the raster
    pub fn read_region(&self, rect: &Rect) -> Result<ColorSample> {
        self.check_region(rect)?;

        let mut sample = ColorSample::with_capacity(rect.area());
        for y in rect.y..rect.bottom() {
            let row = self.row_slice(y, rect.x, rect.right());
            for px in row.chunks_exact(CHANNELS) {
                if let [r, g, b, _] = *px {
                    sample.push(r, g, b);
                }
            }
        }
        Ok(sample)
    }

    /// Collect the RGB channels of the pixels in `[x_start, x_end)` on row `y`
    ///
    /// # Errors
    ///
    /// Returns `PixelAccess` if the span lies outside the raster
    pub fn read_span(
        &self,
        y: usize,
        x_start: usize,
        x_end: usize,
        sample: &mut ColorSample,
    ) -> Result<()> {
        let rect = Rect::new(x_start, y, x_end.saturating_sub(x_start), 1);
        self.check_region(&rect)?;
        for px in self.row_slice(y, x_start, x_end).chunks_exact(CHANNELS) {
            if let [r, g, b, _] = *px {
                sample.push(r, g, b);
            }
        }
        Ok(())
    }

    /// Paint every pixel of a rectangle with an opaque color
    ///
    /// # Errors
    ///
    /// Returns `PixelAccess` if any part of the rectangle lies outside the raster
    pub fn fill_rect(&mut self, rect: &Rect, color: Rgb) -> Result<()> {
        self.check_region(rect)?;
        for y in rect.y..rect.bottom() {
            self.paint_row(y, rect.x, rect.right(), color);
        }
        Ok(())
    }

    /// Paint the pixels in `[x_start, x_end)` on row `y` with an opaque color
    ///
    /// # Errors
    ///
    /// Returns `PixelAccess` if the span lies outside the raster
    pub fn fill_span(&mut self, y: usize, x_start: usize, x_end: usize, color: Rgb) -> Result<()> {
        let rect = Rect::new(x_start, y, x_end.saturating_sub(x_start), 1);
        self.check_region(&rect)?;
        self.paint_row(y, x_start, x_end, color);
        Ok(())
    }

    fn paint_row(&mut self, y: usize, x_start: usize, x_end: usize, color: Rgb) {
        let rgba = color.to_rgba();
        let start = (y * self.width + x_start) * CHANNELS;
        let end = (y * self.width + x_end) * CHANNELS;
        if let Some(row) = self.data.get_mut(start..end) {
            for px in row.chunks_exact_mut(CHANNELS) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    fn row_slice(&self, y: usize, x_start: usize, x_end: usize) -> &[u8] {
        let start = (y * self.width + x_start) * CHANNELS;
        let end = (y * self.width + x_end) * CHANNELS;
        self.data.get(start..end).unwrap_or(&[])
    }

    const fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y * self.width + x) * CHANNELS)
        } else {
            None
        }
    }

    fn check_region(&self, rect: &Rect) -> Result<()> {
        if rect.right() <= self.width && rect.bottom() <= self.height {
            Ok(())
        } else {
            Err(MosaicError::PixelAccess {
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
                raster_dimensions: (self.width, self.height),
            })
        }
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(CHANNELS))
        .ok_or_else(|| {
            invalid_raster(&format!("{width}x{height} raster overflows addressable memory"))
        })
}
