// src/config.rs

//! Defines the configuration structures for `softraster`.
//!
//! Settings are deserialized from a JSON file whose path is taken from the
//! `SOFTRASTER_CONFIG` environment variable. Every struct carries
//! `#[serde(default)]`, so a partial file only overrides what it names.

use crate::canvas::CompositeMode;
use crate::color::Color;

use anyhow::Context;
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::Path;

/// Environment variable naming the JSON config file.
pub const CONFIG_ENV_VAR: &str = "SOFTRASTER_CONFIG";

/// Process-wide configuration, loaded on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

// --- Top-Level Configuration Structure ---

/// Root of the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Canvas construction settings.
    pub canvas: CanvasConfig,
    /// Settings for the demo scene drawn by the binary.
    pub demo: DemoConfig,
}

impl Config {
    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parses a JSON document.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let config: Config = serde_json::from_str(raw).context("Failed to parse config JSON")?;
        Ok(config)
    }

    /// Loads from `SOFTRASTER_CONFIG` if set, otherwise defaults.
    fn from_env() -> Self {
        Self::load_or_default(std::env::var_os(CONFIG_ENV_VAR).as_deref())
    }

    /// Loads `path` if given, otherwise defaults.
    ///
    /// A missing or broken file is logged and replaced by defaults rather
    /// than aborting.
    fn load_or_default(path: Option<&OsStr>) -> Self {
        let Some(path) = path else {
            info!("{} not set, using default configuration", CONFIG_ENV_VAR);
            return Config::default();
        };
        match Config::load(path) {
            Ok(config) => {
                info!("Loaded configuration from {:?}", path);
                config
            }
            Err(e) => {
                warn!("{:#}. Falling back to default configuration.", e);
                Config::default()
            }
        }
    }
}

// --- Canvas Configuration ---

/// Settings used by `Canvas::with_config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Width in pixels. Must be positive.
    pub width: u32,
    /// Height in pixels. Must be positive.
    pub height: u32,
    /// Rule used by `set_pixel` to combine colors.
    pub composite_mode: CompositeMode,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig {
            width: 64,
            height: 24,
            composite_mode: CompositeMode::Additive,
        }
    }
}

// --- Demo Configuration ---

/// Scene parameters for the demo binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Color the frame is cleared to, as a packed ARGB integer.
    pub background: Color,
    /// Text drawn with the built-in font.
    pub text: String,
    pub text_color: Color,
    /// Sprite rotation in degrees.
    pub sprite_angle: i32,
    /// Print an ASCII preview of the published frame to stdout.
    pub preview: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            background: Color::BLACK,
            text: "Hello, raster!".to_string(),
            text_color: Color::WHITE,
            sprite_angle: 30,
            preview: true,
        }
    }
}
