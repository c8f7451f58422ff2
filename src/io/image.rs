//! Raster loading, PNG export and data URL encoding

use crate::io::configuration::{DATA_URL_IMAGE_PREFIX, PNG_DATA_URL_HEADER};
use crate::io::error::{MosaicError, Result, invalid_data_url};
use crate::raster::Raster;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;
use std::io::Cursor;
use std::path::Path;

const BASE64_MARKER: &str = ";base64,";

/// Load an image file into an RGBA raster
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a supported image format
/// - The image exceeds the raster size limit
pub fn load_raster<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| MosaicError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Raster::from_rgba_image(&img.to_rgba8())
}

/// Save a raster as a PNG file, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_raster<P: AsRef<Path>>(raster: Raster, path: P) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;

    raster
        .into_rgba_image()?
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| MosaicError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Encode a raster as PNG bytes
///
/// # Errors
///
/// Returns an error if PNG encoding fails
pub fn encode_png(raster: Raster) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    raster
        .into_rgba_image()?
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| MosaicError::ImageExport {
            path: "<memory>".into(),
            source: e,
        })?;
    Ok(bytes)
}

/// Encode a raster as a self-contained `data:image/png;base64,...` URL
///
/// # Errors
///
/// Returns an error if PNG encoding fails
pub fn encode_data_url(raster: Raster) -> Result<String> {
    let png = encode_png(raster)?;
    Ok(format!("{PNG_DATA_URL_HEADER}{}", STANDARD.encode(png)))
}

/// Extract the encoded image bytes carried by a base64 image data URL
///
/// # Errors
///
/// Returns `InvalidDataUrl` if the URL does not start with `data:image`, is
/// not base64-encoded, or carries invalid base64
pub fn data_url_payload(data_url: &str) -> Result<Vec<u8>> {
    if !data_url.starts_with(DATA_URL_IMAGE_PREFIX) {
        return Err(invalid_data_url(&"missing 'data:image' prefix"));
    }
    let (_, payload) = data_url
        .split_once(BASE64_MARKER)
        .ok_or_else(|| invalid_data_url(&"only base64 data URLs are supported"))?;
    STANDARD
        .decode(payload.trim())
        .map_err(|e| invalid_data_url(&e))
}

/// Decode a base64 image data URL into a raster
///
/// # Errors
///
/// Returns `InvalidDataUrl` for a malformed URL and `ImageLoad` if the
/// payload is not a decodable image
pub fn decode_data_url(data_url: &str) -> Result<Raster> {
    let bytes = data_url_payload(data_url)?;
    let img = image::load_from_memory(&bytes)?;
    Raster::from_rgba_image(&img.to_rgba8())
}

/// Write the image carried by a data URL to a file
///
/// # Errors
///
/// Returns `InvalidDataUrl` for a malformed URL and `FileSystem` if the file
/// or its parent directory cannot be written
pub fn save_data_url<P: AsRef<Path>>(data_url: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = data_url_payload(data_url)?;
    ensure_parent_dir(path)?;
    std::fs::write(path, bytes).map_err(|e| MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation: "write image",
        source: e,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
