//! The slicing pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use navslice_config::{ConfigValidator, SliceConfig};

use crate::error::SliceError;
use crate::ops::{crop_region, load_rgba, probe_codecs, resize_square, save_png, PixelRect};

/// Cuts every configured region out of one source image.
#[derive(Debug, Clone)]
pub struct IconSlicer {
    config: SliceConfig,
}

impl IconSlicer {
    pub fn new(config: SliceConfig) -> Self {
        Self { config }
    }

    /// Write one icon per region and return their paths, sorted by filename.
    ///
    /// Not transactional: when a later region fails, icons already written
    /// stay on disk.
    pub fn slice(&self) -> Result<Vec<PathBuf>, SliceError> {
        probe_codecs()?;

        let warnings = ConfigValidator::validate(&self.config)?.into_result()?;
        for warning in &warnings {
            warn!(field = %warning.path, "{}", warning.message);
        }

        let config = &self.config;
        fs::create_dir_all(&config.output_dir)?;

        if !config.source.exists() {
            return Err(SliceError::SourceNotFound {
                path: config.source.clone(),
            });
        }

        let img = load_rgba(&config.source)?;
        let (width, height) = img.dimensions();
        info!(
            "Slicing {} ({}x{}) into {} icons",
            config.source.display(),
            width,
            height,
            config.regions().len()
        );

        let mut written = Vec::with_capacity(config.regions().len());
        for region in config.regions() {
            let rect = PixelRect::from_normalized(&region.bbox, width, height);
            if rect.is_empty() {
                return Err(SliceError::DegenerateRegion {
                    filename: region.filename.to_string(),
                    rect,
                });
            }

            let icon = resize_square(&crop_region(&img, rect), config.icon_size);
            let path = config.output_path(region);
            save_png(&icon, &path)?;

            debug!(
                "Cropped {} at {} and resized to {}x{}",
                region.filename, rect, config.icon_size, config.icon_size
            );
            written.push(path);
        }

        written.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(written)
    }
}

/// Slice `source` into `output_dir` with the default icon size and layout.
pub fn slice(source: &Path, output_dir: &Path) -> Result<Vec<PathBuf>, SliceError> {
    IconSlicer::new(SliceConfig::new(source, output_dir)).slice()
}
