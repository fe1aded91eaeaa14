//! Configuration validation.

use std::collections::HashSet;
use std::path::Path;

use crate::error::ConfigError;
use crate::schema::{RegionSpec, SliceConfig};

/// Icons larger than this are almost certainly a typo.
const MAX_REASONABLE_ICON_SIZE: u32 = 1024;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error, if any, into a [`ConfigError`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &SliceConfig) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_icon_size(config, &mut result);
        Self::validate_regions(config.regions, &mut result);

        Ok(result)
    }

    fn validate_icon_size(config: &SliceConfig, result: &mut ValidationResult) {
        if config.icon_size == 0 {
            result.add_error(ValidationError::new(
                "icon_size",
                "icon_size must be greater than 0",
            ));
        }

        if config.icon_size > MAX_REASONABLE_ICON_SIZE {
            result.add_warning(ValidationWarning::new(
                "icon_size",
                format!(
                    "icon_size is very high (>{}), output files will be large",
                    MAX_REASONABLE_ICON_SIZE
                ),
            ));
        }
    }

    /// Check a region table: unit-range boxes with positive extent, unique PNG names.
    pub fn validate_regions(regions: &[RegionSpec], result: &mut ValidationResult) {
        if regions.is_empty() {
            result.add_error(ValidationError::new("regions", "At least one region is required"));
            return;
        }

        let mut seen = HashSet::new();
        for region in regions {
            let bbox = &region.bbox;
            let coords = [bbox.x1, bbox.y1, bbox.x2, bbox.y2];
            if coords.iter().any(|c| !(0.0..=1.0).contains(c)) {
                result.add_error(ValidationError::new(
                    format!("regions[{}].bbox", region.filename),
                    format!("Coordinates must lie within [0, 1], got {:?}", coords),
                ));
            } else if bbox.x1 >= bbox.x2 || bbox.y1 >= bbox.y2 {
                result.add_error(ValidationError::new(
                    format!("regions[{}].bbox", region.filename),
                    "Box must satisfy x1 < x2 and y1 < y2",
                ));
            }

            let is_png = Path::new(region.filename)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
            if !is_png {
                result.add_error(ValidationError::new(
                    format!("regions[{}].filename", region.filename),
                    "Icon filename must end in .png",
                ));
            }

            if !seen.insert(region.filename) {
                result.add_error(ValidationError::new(
                    format!("regions[{}].filename", region.filename),
                    "Duplicate icon filename",
                ));
            }
        }

        for (i, a) in regions.iter().enumerate() {
            for b in &regions[i + 1..] {
                if a.bbox.overlaps(&b.bbox) {
                    result.add_warning(ValidationWarning::new(
                        "regions",
                        format!("Regions '{}' and '{}' overlap", a.filename, b.filename),
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
