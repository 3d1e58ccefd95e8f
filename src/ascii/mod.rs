//! ASCII renderer module for converting decoded images to ASCII art.
//!
//! The renderer is a pure pipeline applied once per image:
//!
//! 1. **Color normalization** - flatten alpha channels over white
//! 2. **Resize** - aspect-corrected Lanczos3 resize to the character grid
//! 3. **Grayscale** - single luminance channel (0-255)
//! 4. **Binarization** - optional threshold to two levels
//! 5. **Character mapping** - ramp lookup, rows joined by newlines

mod dimensions;
mod grayscale;
mod normalize;
mod ramp;
mod render;

pub use dimensions::{output_height, DEFAULT_CHAR_ASPECT_RATIO};
pub use grayscale::to_luminance;
pub use normalize::flatten_alpha;
pub use ramp::{char_for_luminance, map_to_chars, ASCII_RAMP};
pub use render::{apply_threshold, render, RenderConfig};
