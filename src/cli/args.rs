//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

/// Fetch an image from a URL and print it as ASCII art
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about = "Render an image URL as ASCII art", long_about = None)]
pub struct Args {
    /// Source image URL
    pub url: String,

    /// Target character-grid width (default: 80)
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Aspect-ratio correction divisor (default: 2.0)
    #[arg(short, long)]
    pub ratio: Option<f32>,

    /// Binarization cutoff, 0-255 (default: off)
    #[arg(short, long)]
    pub threshold: Option<u8>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
