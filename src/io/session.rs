//! Explicit editing session holding the currently loaded image
//!
//! Replaces process-wide "current file" state: callers own a `Session` and pass
//! it where needed, while the mosaic core stays a pure function of its inputs.

use crate::io::error::{MosaicError, Result};
use crate::io::image::load_raster;
use crate::raster::Raster;
use crate::render::mosaic::{MosaicParameters, MosaicRenderer};
use log::debug;
use rand::Rng;
use std::path::{Path, PathBuf};

/// Image currently open in a session
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// File the image was read from, if any
    pub path: Option<PathBuf>,
    /// Decoded pixels
    pub raster: Raster,
}

/// Tracks whether an image is loaded and renders mosaics of it
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<LoadedImage>,
}

impl Session {
    /// Create a session with no image loaded
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Load an image file, replacing any image already loaded
    ///
    /// The previous image is kept when loading fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded
    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<(usize, usize)> {
        let path = path.as_ref();
        let raster = load_raster(path)?;
        debug!(
            "Loaded {} ({}x{})",
            path.display(),
            raster.width(),
            raster.height()
        );
        self.current = Some(LoadedImage {
            path: Some(path.to_path_buf()),
            raster,
        });
        Ok(self.dimensions().unwrap_or_default())
    }

    /// Load an in-memory raster, replacing any image already loaded
    pub fn load(&mut self, raster: Raster) {
        self.current = Some(LoadedImage { path: None, raster });
    }

    /// Forget the loaded image
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Check if an image is loaded
    pub const fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    /// The loaded image, if any
    pub const fn current(&self) -> Option<&LoadedImage> {
        self.current.as_ref()
    }

    /// Natural (width, height) of the loaded image
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.current.as_ref().map(|img| img.raster.dimensions())
    }

    /// Render a mosaic of the loaded image
    ///
    /// # Errors
    ///
    /// Returns `NoImageLoaded` without an image, otherwise any render failure
    pub fn render<R: Rng>(
        &self,
        renderer: &mut MosaicRenderer<R>,
        params: &MosaicParameters,
    ) -> Result<Raster> {
        let image = self.current.as_ref().ok_or(MosaicError::NoImageLoaded)?;
        renderer.render(&image.raster, params)
    }
}
