//! Mapping normalized boxes to pixels, and cropping.

use std::fmt;

use image::{imageops, RgbaImage};

use navslice_config::NormalizedBox;

/// A pixel rectangle. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl PixelRect {
    /// Scale `bbox` to a `width` x `height` image.
    ///
    /// Every coordinate is truncated toward zero, never rounded, so that a
    /// given source size always yields the same rectangles.
    pub fn from_normalized(bbox: &NormalizedBox, width: u32, height: u32) -> Self {
        Self {
            left: truncate(width, bbox.x1),
            top: truncate(height, bbox.y1),
            right: truncate(width, bbox.x2),
            bottom: truncate(height, bbox.y2),
        }
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

impl fmt::Display for PixelRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.left, self.top, self.right, self.bottom)
    }
}

fn truncate(extent: u32, fraction: f64) -> u32 {
    (extent as f64 * fraction) as u32
}

/// Copy `rect` out of `img`.
pub fn crop_region(img: &RgbaImage, rect: PixelRect) -> RgbaImage {
    imageops::crop_imm(img, rect.left, rect.top, rect.width(), rect.height()).to_image()
}
