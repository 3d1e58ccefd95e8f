//! Color mode normalization.
//!
//! Images that carry an alpha channel (RGBA, grayscale+alpha) are
//! composited over an opaque white background before any luminance work,
//! so transparent regions render as blank space rather than black.
//! Paletted formats are already expanded to RGB(A) by the decoder.

use image::{DynamicImage, Rgb, RgbImage};

/// Flatten an image onto an opaque white background.
///
/// Alpha-carrying images are blended channel-by-channel using the alpha
/// value as the mask: `out = src * a/255 + 255 * (1 - a/255)`. Images
/// that are already opaque (RGB or grayscale) pass through unchanged.
pub fn flatten_alpha(img: DynamicImage) -> DynamicImage {
    if !img.color().has_alpha() {
        return img;
    }

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut flat = RgbImage::new(width, height);

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let alpha = pixel[3] as u32;
        let blend = |src: u8| -> u8 {
            ((src as u32 * alpha + 255 * (255 - alpha)) / 255) as u8
        };
        flat.put_pixel(x, y, Rgb([blend(pixel[0]), blend(pixel[1]), blend(pixel[2])]));
    }

    DynamicImage::ImageRgb8(flat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Rgba, RgbaImage};

    #[test]
    fn test_opaque_rgb_passes_through() {
        let rgb = RgbImage::from_pixel(2, 2, Rgb([10, 20, 30]));
        let out = flatten_alpha(DynamicImage::ImageRgb8(rgb.clone()));
        assert_eq!(out.to_rgb8(), rgb);
    }

    #[test]
    fn test_grayscale_passes_through() {
        let gray = GrayImage::from_pixel(3, 3, image::Luma([100]));
        let out = flatten_alpha(DynamicImage::ImageLuma8(gray));
        assert!(!out.color().has_alpha());
    }

    #[test]
    fn test_fully_transparent_becomes_white() {
        let rgba = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        let out = flatten_alpha(DynamicImage::ImageRgba8(rgba)).to_rgb8();
        for pixel in out.pixels() {
            assert_eq!(pixel.0, [255, 255, 255]);
        }
    }

    #[test]
    fn test_fully_opaque_keeps_color() {
        let rgba = RgbaImage::from_pixel(1, 1, Rgba([12, 34, 56, 255]));
        let out = flatten_alpha(DynamicImage::ImageRgba8(rgba)).to_rgb8();
        assert_eq!(out.get_pixel(0, 0).0, [12, 34, 56]);
    }

    #[test]
    fn test_half_alpha_blends_toward_white() {
        // Black at ~50% alpha over white: (0*128 + 255*127) / 255 = 127
        let rgba = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128]));
        let out = flatten_alpha(DynamicImage::ImageRgba8(rgba)).to_rgb8();
        assert_eq!(out.get_pixel(0, 0).0, [127, 127, 127]);
    }
}
