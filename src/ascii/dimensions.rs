//! Output dimension calculation with terminal aspect-ratio correction.

/// Default terminal character aspect ratio.
/// Monospace cells are typically ~2x taller than wide, so the computed
/// height is divided by this to avoid vertical stretching.
pub const DEFAULT_CHAR_ASPECT_RATIO: f32 = 2.0;

/// Calculate the output height for a target character width.
///
/// `new_height = round(target_width * (img_height / img_width) / ratio)`,
/// clamped to a minimum of 1 so degenerate inputs still produce a row.
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `target_width` - Output width in characters
/// * `ratio` - Character cell aspect ratio (height/width, typically ~2.0)
pub fn output_height(img_width: u32, img_height: u32, target_width: u32, ratio: f32) -> u32 {
    if img_width == 0 {
        return 1;
    }
    let scaled = target_width as f32 * (img_height as f32 / img_width as f32) / ratio;
    (scaled.round() as u32).max(1)
}
