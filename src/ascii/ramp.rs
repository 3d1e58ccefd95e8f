//! Character ramp definition and luminance-to-character mapping.

/// ASCII density ramp (10 levels).
/// Characters ordered from darkest (@) to lightest (space), so that
/// luminance 0 renders as the densest glyph and 255 as blank.
pub const ASCII_RAMP: &[char] = &['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];

/// Map a single luminance value (0-255) to a ramp character.
///
/// The index is `lum * (len - 1) / 255` with integer math, so 0 always
/// selects the first (darkest) character and 255 the last (lightest).
pub fn char_for_luminance(lum: u8, ramp: &[char]) -> char {
    if ramp.is_empty() {
        return ' ';
    }
    let idx = (lum as usize * (ramp.len() - 1)) / 255;
    ramp[idx]
}

/// Map a slice of luminance values to ramp characters.
///
/// # Arguments
/// * `luminance` - Luminance values (0-255), one per cell, row-major order
/// * `ramp` - Character ramp ordered from darkest to lightest
///
/// # Returns
/// A vector of characters, one per input value.
pub fn map_to_chars(luminance: &[u8], ramp: &[char]) -> Vec<char> {
    luminance
        .iter()
        .map(|&lum| char_for_luminance(lum, ramp))
        .collect()
}
