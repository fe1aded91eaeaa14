//! Icon resizing.

use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

/// Resampling filter for every icon.
pub const ICON_FILTER: FilterType = FilterType::Lanczos3;

/// Resize to exactly `size` x `size`, stretching or squashing as needed.
///
/// Resampling runs on premultiplied alpha so the colour of fully transparent
/// pixels never bleeds into visible ones.
pub fn resize_square(img: &RgbaImage, size: u32) -> RgbaImage {
    let premultiplied = premultiply(img);
    let resized = imageops::resize(&premultiplied, size, size, ICON_FILTER);
    unpremultiply(&resized)
}

fn premultiply(img: &RgbaImage) -> Rgba32FImage {
    Rgba32FImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0.map(|c| c as f32 / 255.0);
        Rgba([r * a, g * a, b * a, a])
    })
}

fn unpremultiply(img: &Rgba32FImage) -> RgbaImage {
    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let alpha = to_u8(a);
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([to_u8(r / a), to_u8(g / a), to_u8(b / a), alpha])
    })
}

fn to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
