use super::*;
use image::{ImageFormat, Rgba, RgbaImage};
use navslice_config::{NormalizedBox, NAV_REGIONS};

fn rect(left: u32, top: u32, right: u32, bottom: u32) -> PixelRect {
    PixelRect {
        left,
        top,
        right,
        bottom,
    }
}

#[test]
fn test_nav_rects_for_design_size() {
    let rects: Vec<PixelRect> = NAV_REGIONS
        .iter()
        .map(|r| PixelRect::from_normalized(&r.bbox, 1024, 560))
        .collect();

    assert_eq!(rects[0], rect(0, 0, 327, 274));
    assert_eq!(rects[1], rect(348, 0, 675, 274));
    assert_eq!(rects[2], rect(696, 0, 1024, 274));
    assert_eq!(rects[3], rect(174, 291, 501, 560));
    assert_eq!(rects[4], rect(522, 291, 849, 560));
}

#[test]
fn test_rect_truncates_instead_of_rounding() {
    // 1024 * 0.32 = 327.68
    let r = PixelRect::from_normalized(&NormalizedBox::new(0.0, 0.0, 0.32, 0.5), 1024, 3);
    assert_eq!(r.right, 327);
    assert_eq!(r.bottom, 1);
}

#[test]
fn test_rect_dimensions() {
    let r = rect(10, 20, 110, 70);
    assert_eq!(r.width(), 100);
    assert_eq!(r.height(), 50);
    assert!(!r.is_empty());
    assert_eq!(r.to_string(), "(10, 20, 110, 70)");
}

#[test]
fn test_rect_empty_on_tiny_source() {
    let r = PixelRect::from_normalized(&NAV_REGIONS[0].bbox, 1, 1);
    assert_eq!(r, rect(0, 0, 0, 0));
    assert!(r.is_empty());
}

#[test]
fn test_crop_region() {
    let img = RgbaImage::from_fn(8, 8, |x, y| Rgba([x as u8, y as u8, 0, 255]));
    let cropped = crop_region(&img, rect(2, 3, 6, 5));
    assert_eq!(cropped.dimensions(), (4, 2));
    assert_eq!(cropped.get_pixel(0, 0), &Rgba([2, 3, 0, 255]));
    assert_eq!(cropped.get_pixel(3, 1), &Rgba([5, 4, 0, 255]));
}

#[test]
fn test_resize_square_ignores_aspect_ratio() {
    let img = RgbaImage::from_pixel(300, 40, Rgba([10, 20, 30, 255]));
    let icon = resize_square(&img, 96);
    assert_eq!(icon.dimensions(), (96, 96));
    assert_eq!(icon.get_pixel(48, 48), &Rgba([10, 20, 30, 255]));
}

#[test]
fn test_resize_square_keeps_transparent_colour_out() {
    // left half transparent red, right half opaque blue
    let img = RgbaImage::from_fn(20, 20, |x, _| {
        if x < 10 {
            Rgba([255, 0, 0, 0])
        } else {
            Rgba([0, 0, 255, 255])
        }
    });

    let icon = resize_square(&img, 96);

    let edge = icon.get_pixel(48, 48);
    assert_eq!(edge[0], 0);
    assert!(edge[3] > 0);
    for p in icon.pixels().filter(|p| p[3] > 0) {
        assert_eq!(p[0], 0);
        assert_eq!(p[2], 255);
    }
    assert_eq!(icon.get_pixel(0, 48), &Rgba([0, 0, 0, 0]));
}

#[test]
fn test_probe_codecs() {
    assert!(probe_codecs().is_ok());
}

#[test]
fn test_require_disabled_format() {
    // Only png and jpeg are compiled in.
    let err = require_format(ImageFormat::Gif).unwrap_err();
    match err {
        crate::SliceError::MissingCapability { format, hint } => {
            assert_eq!(format, "Gif");
            assert!(hint.contains("`gif`"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_rgba_adds_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rgb.png");
    image::RgbImage::from_pixel(4, 4, image::Rgb([1, 2, 3])).save(&path).unwrap();

    let img = load_rgba(&path).unwrap();
    assert_eq!(img.get_pixel(0, 0), &Rgba([1, 2, 3, 255]));
}

#[test]
fn test_load_rgba_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not an image").unwrap();

    let err = load_rgba(&path).unwrap_err();
    assert!(matches!(err, crate::SliceError::Decode { .. }));
    assert!(err.to_string().contains("broken.png"));
}

#[test]
fn test_save_png_into_missing_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent").join("icon.png");
    let img = RgbaImage::new(2, 2);

    let err = save_png(&img, &path).unwrap_err();
    assert!(matches!(err, crate::SliceError::Write { .. }));
}
