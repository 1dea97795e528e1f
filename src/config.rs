//! Configuration file handling.
//!
//! The config lives at `<config dir>/cast2gif/config.toml`. Every field has
//! a default, so a missing file or a partial file is fine. Command-line
//! flags are applied on top by the binary; the result is immutable for the
//! rest of the run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub output: OutputConfig,
}

/// Settings consumed by the screen and the frame compositor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Resolution used to scale the font size to pixels
    pub dpi: u32,
    /// Font file; the built-in monospace font is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
    /// Font size in points
    pub font_size: f32,
    /// Longest pause between output events in seconds (0 = the recording's
    /// `idle_time_limit`, or unlimited when it has none)
    pub max_pause: f64,
    /// How long to hold the final screen in seconds (0 = no trailing frame)
    pub final_hold: f64,
    /// Log and skip unsupported sequences instead of failing
    pub lenient: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: 144,
            font_path: None,
            font_size: 12.0,
            max_pause: 0.0,
            final_hold: 0.0,
            lenient: false,
        }
    }
}

impl RenderConfig {
    /// Pause limit, `None` when unlimited.
    pub fn pause_limit(&self) -> Option<f64> {
        (self.max_pause > 0.0).then_some(self.max_pause)
    }
}

/// Settings for the GIF encoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Color quantization speed, 1 (best) to 30 (fastest)
    pub speed: i32,
    /// Loop the animation forever
    pub repeat: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            speed: 10,
            repeat: true,
        }
    }
}

impl Config {
    /// Path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("cast2gif").join("config.toml"))
    }

    /// Load the configuration file, falling back to defaults if it is missing.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config TOML")
    }

    /// Write the configuration to its default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;
        Ok(())
    }
}
