//! Configuration file support for inkboard.
//!
//! This module handles loading and validating user settings from the
//! configuration file at `~/.config/inkboard/config.toml`. Settings include
//! drawing defaults, surface appearance, and export preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, ExportConfig, SurfaceConfig};

use crate::input::state::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root type that gets deserialized from the TOML file. All
/// fields have sensible defaults and will use those if not specified.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "pen"
/// default_color = "#6366f1"
/// default_width = 3.0
///
/// [surface]
/// background = "white"
///
/// [export]
/// directory = "~/Pictures/Inkboard"
/// filename_prefix = "drawing"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing tool defaults (tool, color, width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Surface appearance (background color)
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// PNG export preferences
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged.
    ///
    /// Validated ranges:
    /// - `default_width`: 1.0 - 20.0
    /// - `filename_prefix`: non-empty
    fn validate_and_clamp(&mut self) {
        if !(MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to {:.1}-{:.1} range",
                self.drawing.default_width,
                MIN_STROKE_WIDTH,
                MAX_STROKE_WIDTH
            );
            self.drawing.default_width = self
                .drawing
                .default_width
                .clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
        }

        if self.export.filename_prefix.trim().is_empty() {
            log::warn!("Empty filename_prefix, falling back to 'drawing'");
            self.export.filename_prefix = "drawing".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML and writes it to
    /// `~/.config/inkboard/config.toml`, creating the parent directory if
    /// it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's
    /// config directory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// Returns the JSON schema describing the configuration file format.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
