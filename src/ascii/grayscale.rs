//! Luminance conversion using ITU-R BT.601 weighting.

use image::{DynamicImage, GrayImage};

/// Convert an image to a single luminance channel (0-255).
///
/// Uses the BT.601 formula `Y = 0.299*R + 0.587*G + 0.114*B` with integer
/// math (coefficients scaled by 1000), so pure white maps to exactly 255,
/// pure black to 0, and gray `(v, v, v)` to `v`. An image that is already
/// grayscale passes through unchanged.
pub fn to_luminance(img: &DynamicImage) -> GrayImage {
    if let DynamicImage::ImageLuma8(gray) = img {
        return gray.clone();
    }

    let rgb = img.to_rgb8();
    let mut gray = GrayImage::new(rgb.width(), rgb.height());
    for (src, dst) in rgb.pixels().zip(gray.pixels_mut()) {
        let [r, g, b] = src.0;
        let lum = (299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000;
        dst.0 = [lum as u8];
    }
    gray
}
