//! Configuration file handling for asciify.
//!
//! Loads render defaults from `~/.config/asciify/config.toml` or a custom
//! path. Explicit CLI flags always win over file values.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{RenderConfig, DEFAULT_CHAR_ASPECT_RATIO};

/// Built-in default output width in characters.
pub const DEFAULT_WIDTH: u32 = 80;

/// Configuration file structure for asciify.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderDefaults,
}

/// Default render settings from the `[render]` table.
#[derive(Debug, Deserialize, Default)]
pub struct RenderDefaults {
    pub width: Option<u32>,
    pub ratio: Option<f32>,
    pub threshold: Option<u8>,
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Resolve effective render settings.
    ///
    /// Precedence: explicit CLI flag, then config file value, then the
    /// built-in default (width 80, ratio 2.0, no threshold).
    pub fn render_config(
        &self,
        width: Option<u32>,
        ratio: Option<f32>,
        threshold: Option<u8>,
    ) -> RenderConfig {
        RenderConfig {
            width: width.or(self.render.width).unwrap_or(DEFAULT_WIDTH),
            ratio: ratio
                .or(self.render.ratio)
                .unwrap_or(DEFAULT_CHAR_ASPECT_RATIO),
            threshold: threshold.or(self.render.threshold),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        })
        .join("asciify")
        .join("config.toml")
}
