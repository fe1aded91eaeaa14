//! Shared image load/save helpers.

use std::path::Path;

use image::{ImageError, ImageFormat, ImageReader, RgbaImage};

use crate::error::SliceError;

/// Decode an image, sniffing the format from its contents, and normalize it to RGBA8.
///
/// Sources without an alpha channel come back fully opaque.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, SliceError> {
    let decode_err = |source: ImageError| SliceError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;

    Ok(img.into_rgba8())
}

/// Write an RGBA image as PNG, replacing any existing file.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), SliceError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| SliceError::Write {
            path: path.to_path_buf(),
            source,
        })
}
