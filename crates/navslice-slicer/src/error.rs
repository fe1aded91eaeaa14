//! Slicing errors.

use std::path::PathBuf;

use image::ImageError;
use thiserror::Error;

use navslice_config::ConfigError;

use crate::ops::PixelRect;

#[derive(Debug, Error)]
pub enum SliceError {
    #[error("{format} support is not available: {hint}")]
    MissingCapability { format: String, hint: String },

    #[error("Source image not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("Region {filename} maps to an empty rectangle {rect}; the source image is too small")]
    DegenerateRegion { filename: String, rect: PixelRect },

    #[error("Failed to save icon {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
