//! Mosaic constants and runtime configuration defaults

// Jitter keeps block extents within 90-100% of the requested size
/// Numerator of the minimum block extent ratio
pub const JITTER_NUMERATOR: usize = 9;
/// Denominator of the minimum block extent ratio
pub const JITTER_DENOMINATOR: usize = 10;

/// Number of channels per pixel (R, G, B, A)
pub const CHANNELS: usize = 4;

// Default values for configurable parameters
/// Default nominal block size for square mode
pub const DEFAULT_BLOCK_SIZE: usize = 10;
/// Default hexagon circumradius for hex mode
pub const DEFAULT_HEX_RADIUS: usize = 10;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Extension of the data URL sidecar file
pub const DATA_URL_EXTENSION: &str = "txt";
/// Prefix every accepted image data URL starts with
pub const DATA_URL_IMAGE_PREFIX: &str = "data:image";
/// Header of the PNG data URLs produced by the encoder
pub const PNG_DATA_URL_HEADER: &str = "data:image/png;base64,";
