//! Error types for raster, mosaic and file operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode or save a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Raster buffer does not describe a valid image
    InvalidRasterData {
        /// Description of what's wrong with the buffer
        reason: String,
    },

    /// Mosaic parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A region read or fill reached outside the raster
    ///
    /// Aborts the whole render; no partially painted raster is returned.
    PixelAccess {
        /// Left edge of the requested region
        x: usize,
        /// Top edge of the requested region
        y: usize,
        /// Requested region width
        width: usize,
        /// Requested region height
        height: usize,
        /// Raster dimensions (width, height)
        raster_dimensions: (usize, usize),
    },

    /// Data URL is malformed or does not carry an image
    InvalidDataUrl {
        /// Description of the problem
        reason: String,
    },

    /// A session operation required an image but none is loaded
    NoImageLoaded,

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidRasterData { reason } => {
                write!(f, "Invalid raster data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::PixelAccess {
                x,
                y,
                width,
                height,
                raster_dimensions,
            } => {
                write!(
                    f,
                    "Region {width}x{height} at ({x}, {y}) lies outside the {}x{} raster",
                    raster_dimensions.0, raster_dimensions.1
                )
            }
            Self::InvalidDataUrl { reason } => {
                write!(f, "Invalid image data URL: {reason}")
            }
            Self::NoImageLoaded => write!(f, "No image is currently loaded"),
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<image::ImageError> for MosaicError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<memory>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid raster data error
pub fn invalid_raster(reason: &impl ToString) -> MosaicError {
    MosaicError::InvalidRasterData {
        reason: reason.to_string(),
    }
}

/// Create an invalid data URL error
pub fn invalid_data_url(reason: &impl ToString) -> MosaicError {
    MosaicError::InvalidDataUrl {
        reason: reason.to_string(),
    }
}

/// Create an error for an unusable target path
pub fn path_error(path: impl Into<PathBuf>, reason: &str) -> MosaicError {
    let path = path.into();
    MosaicError::InvalidParameter {
        parameter: "path",
        value: path.display().to_string(),
        reason: reason.to_string(),
    }
}
