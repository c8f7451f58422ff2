//! Input/output, session state and error handling

/// Command-line parsing and batch file processing
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types for all mosaic operations
pub mod error;
/// Raster loading, PNG export and data URL encoding
pub mod image;
/// Multi-file progress display
pub mod progress;
/// Explicit session holding the currently loaded image
pub mod session;
