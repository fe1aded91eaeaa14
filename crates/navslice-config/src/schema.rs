//! Slice configuration and the navigation icon layout.

use std::path::PathBuf;

/// Default source image, relative to the working directory.
pub const DEFAULT_SOURCE: &str = "assets/icons/nav/nav_source.png";

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/icons/nav";

/// Edge length in pixels of every generated icon.
pub const DEFAULT_ICON_SIZE: u32 = 96;

/// A rectangle expressed as fractions of the image width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl NormalizedBox {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Whether the two boxes share any interior area. Touching edges do not count.
    pub fn overlaps(&self, other: &NormalizedBox) -> bool {
        self.x1 < other.x2 && other.x1 < self.x2 && self.y1 < other.y2 && other.y1 < self.y2
    }
}

/// One output icon: the file it is written to and the box it is cut from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionSpec {
    pub filename: &'static str,
    pub bbox: NormalizedBox,
}

impl RegionSpec {
    pub const fn new(filename: &'static str, bbox: NormalizedBox) -> Self {
        Self { filename, bbox }
    }
}

/// Navigation card layout, designed against a 1024x560 sheet.
///
/// Top row holds three cards, the bottom row two cards centered. Entries are
/// processed in this order.
pub const NAV_REGIONS: [RegionSpec; 5] = [
    RegionSpec::new("nav_plan_active.png", NormalizedBox::new(0.00, 0.00, 0.32, 0.49)),
    RegionSpec::new("nav_timer_active.png", NormalizedBox::new(0.34, 0.00, 0.66, 0.49)),
    RegionSpec::new("nav_parent_active.png", NormalizedBox::new(0.68, 0.00, 1.00, 0.49)),
    RegionSpec::new("nav_score_active.png", NormalizedBox::new(0.17, 0.52, 0.49, 1.00)),
    RegionSpec::new("nav_growth_active.png", NormalizedBox::new(0.51, 0.52, 0.83, 1.00)),
];

/// Inputs to a slicing run.
#[derive(Debug, Clone)]
pub struct SliceConfig {
    /// Image the icons are cut from.
    pub source: PathBuf,
    /// Directory the icons are written to. Created when missing, never cleared.
    pub output_dir: PathBuf,
    /// Width and height of each generated icon.
    pub icon_size: u32,
    pub(crate) regions: &'static [RegionSpec],
}

impl SliceConfig {
    /// Config for `source` writing into `output_dir`, with the default icon size.
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Config with the default output directory and layout for the given source.
    pub fn with_source(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// Layout to cut. Always [`NAV_REGIONS`].
    pub fn regions(&self) -> &'static [RegionSpec] {
        self.regions
    }

    /// Path a region's icon is written to.
    pub fn output_path(&self, region: &RegionSpec) -> PathBuf {
        self.output_dir.join(region.filename)
    }
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            icon_size: DEFAULT_ICON_SIZE,
            regions: &NAV_REGIONS,
        }
    }
}
