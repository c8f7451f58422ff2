//! Per-channel median aggregation
//!
//! Each channel is sorted and reduced independently. This is a scalar median
//! per channel, not a vector median in any color space, so the result may be
//! a color that no single source pixel carries.

use crate::raster::color::Rgb;

/// Median of an ascending sequence of bytes
///
/// Odd lengths return the middle element; even lengths return the average of
/// the two central elements with halves rounded up. Empty input has no median.
pub fn median_of_sorted(values: &[u8]) -> Option<u8> {
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        return values.get(mid).copied();
    }
    let upper = *values.get(mid)?;
    let lower = *values.get(mid.checked_sub(1)?)?;
    Some(((u16::from(lower) + u16::from(upper)).div_ceil(2)) as u8)
}

/// Channel samples gathered from one region's pixels
///
/// The three channel vectors always have the same length. A sample is consumed
/// by the aggregation that reduces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorSample {
    reds: Vec<u8>,
    greens: Vec<u8>,
    blues: Vec<u8>,
}

impl ColorSample {
    /// Create an empty sample
    pub const fn new() -> Self {
        Self {
            reds: Vec::new(),
            greens: Vec::new(),
            blues: Vec::new(),
        }
    }

    /// Create an empty sample with room for `capacity` pixels
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            reds: Vec::with_capacity(capacity),
            greens: Vec::with_capacity(capacity),
            blues: Vec::with_capacity(capacity),
        }
    }

    /// Record one pixel's channels
    pub fn push(&mut self, r: u8, g: u8, b: u8) {
        self.reds.push(r);
        self.greens.push(g);
        self.blues.push(b);
    }

    /// Number of pixels recorded
    pub fn len(&self) -> usize {
        self.reds.len()
    }

    /// Check if no pixels were recorded
    pub fn is_empty(&self) -> bool {
        self.reds.is_empty()
    }

    /// Per-channel median, or `None` for an empty sample
    pub fn median(self) -> Option<Rgb> {
        let Self {
            mut reds,
            mut greens,
            mut blues,
        } = self;
        reds.sort_unstable();
        greens.sort_unstable();
        blues.sort_unstable();
        Some(Rgb::new(
            median_of_sorted(&reds)?,
            median_of_sorted(&greens)?,
            median_of_sorted(&blues)?,
        ))
    }

    /// Per-channel rounded mean, or `None` for an empty sample
    pub fn mean(self) -> Option<Rgb> {
        if self.is_empty() {
            return None;
        }
        Some(Rgb::new(
            channel_mean(&self.reds),
            channel_mean(&self.greens),
            channel_mean(&self.blues),
        ))
    }
}

impl FromIterator<Rgb> for ColorSample {
    fn from_iter<I: IntoIterator<Item = Rgb>>(iter: I) -> Self {
        let mut sample = Self::new();
        for color in iter {
            sample.push(color.r, color.g, color.b);
        }
        sample
    }
}

// Rounds halves up, matching the even-length median
fn channel_mean(values: &[u8]) -> u8 {
    let count = values.len() as u64;
    let total: u64 = values.iter().map(|&v| u64::from(v)).sum();
    ((2 * total + count) / (2 * count)) as u8
}
