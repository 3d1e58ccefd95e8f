//! The rendering pipeline: normalize, resize, grayscale, threshold, map.

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage};

use super::dimensions::{output_height, DEFAULT_CHAR_ASPECT_RATIO};
use super::grayscale::to_luminance;
use super::normalize::flatten_alpha;
use super::ramp::{char_for_luminance, ASCII_RAMP};

/// Settings controlling resize and binarization.
///
/// Immutable after construction; one instance per render call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Output width in characters.
    pub width: u32,
    /// Character cell aspect-ratio divisor applied to the output height.
    pub ratio: f32,
    /// Optional binarization cutoff. When set, luminance strictly above
    /// the cutoff becomes 255 and everything else 0 before mapping.
    pub threshold: Option<u8>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 80,
            ratio: DEFAULT_CHAR_ASPECT_RATIO,
            threshold: None,
        }
    }
}

/// Binarize a grayscale image in place.
///
/// Pixels strictly greater than `threshold` become 255, all others 0.
pub fn apply_threshold(gray: &mut GrayImage, threshold: u8) {
    for pixel in gray.pixels_mut() {
        pixel[0] = if pixel[0] > threshold { 255 } else { 0 };
    }
}

/// Render a decoded image as an ASCII string.
///
/// The pipeline runs strictly in order: flatten alpha over white, resize
/// to the aspect-corrected character grid with Lanczos3, convert to
/// luminance, optionally binarize, then map each pixel through the ramp.
/// Rows are exactly `config.width` characters and joined by `\n` with no
/// trailing newline.
pub fn render(img: DynamicImage, config: &RenderConfig) -> String {
    if config.width == 0 {
        return String::new();
    }

    let flat = flatten_alpha(img);
    let (img_width, img_height) = (flat.width(), flat.height());
    let height = output_height(img_width, img_height, config.width, config.ratio);
    log::debug!(
        "rendering {}x{} image as {}x{} characters",
        img_width,
        img_height,
        config.width,
        height
    );

    let resized = flat.resize_exact(config.width, height, FilterType::Lanczos3);
    let mut gray = to_luminance(&resized);
    if let Some(threshold) = config.threshold {
        apply_threshold(&mut gray, threshold);
    }

    let width = config.width as usize;
    let mut out = String::with_capacity((width + 1) * height as usize);
    for (row_idx, row) in gray.as_raw().chunks_exact(width).enumerate() {
        if row_idx > 0 {
            out.push('\n');
        }
        for &lum in row {
            out.push(char_for_luminance(lum, ASCII_RAMP));
        }
    }
    out
}
