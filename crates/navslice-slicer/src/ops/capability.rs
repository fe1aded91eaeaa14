//! Codec availability checks.
//!
//! The `image` crate compiles codecs in behind cargo features, so a build can
//! link the crate and still be unable to read or write PNG. These checks run
//! before any filesystem work.

use image::ImageFormat;

use crate::error::SliceError;

/// Fail unless `format` can be both decoded and encoded by this build.
pub fn require_format(format: ImageFormat) -> Result<(), SliceError> {
    if format.reading_enabled() && format.writing_enabled() {
        return Ok(());
    }

    let name = format!("{:?}", format);
    Err(SliceError::MissingCapability {
        hint: format!(
            "rebuild with the `{}` feature of the `image` crate enabled",
            name.to_lowercase()
        ),
        format: name,
    })
}

/// Check the codecs the slicer needs: PNG in and PNG out.
pub fn probe_codecs() -> Result<(), SliceError> {
    require_format(ImageFormat::Png)
}
