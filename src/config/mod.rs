//! Configuration file support for sdn-diagrams.
//!
//! This module handles loading and validating settings from the configuration file
//! located at `~/.config/sdn-diagrams/config.toml`. Settings cover where figures are
//! written, the export resolution and crop, and the font family.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::BBoxMode;
pub use types::{FontConfig, OutputConfig};

use crate::export::ExportOptions;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [output]
/// directory = "diagrams"
/// dpi = 300.0
/// bbox = "tight"
/// pad_inches = 0.1
///
/// [font]
/// family = "DejaVu Sans"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Output directory, resolution and crop
    #[serde(default)]
    pub output: OutputConfig,

    /// Font used for every label
    #[serde(default)]
    pub font: FontConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `output.dpi`: 36.0 - 1200.0
    /// - `output.pad_inches`: 0.0 - 2.0
    /// - `font.family`: non-empty
    pub fn validate_and_clamp(&mut self) {
        if !(36.0..=1200.0).contains(&self.output.dpi) {
            log::warn!(
                "Invalid dpi {:.1}, clamping to 36-1200 range",
                self.output.dpi
            );
            // NaN fails the range check and clamps to NaN, so reset it first
            if self.output.dpi.is_nan() {
                self.output.dpi = 300.0;
            }
            self.output.dpi = self.output.dpi.clamp(36.0, 1200.0);
        }

        if !(0.0..=2.0).contains(&self.output.pad_inches) {
            log::warn!(
                "Invalid pad_inches {:.2}, clamping to 0.0-2.0 range",
                self.output.pad_inches
            );
            if self.output.pad_inches.is_nan() {
                self.output.pad_inches = 0.1;
            }
            self.output.pad_inches = self.output.pad_inches.clamp(0.0, 2.0);
        }

        if self.font.family.trim().is_empty() {
            log::warn!(
                "Empty font family, falling back to '{}'",
                crate::draw::font::DEFAULT_FAMILY
            );
            self.font.family = crate::draw::font::DEFAULT_FAMILY.to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sdn-diagrams/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sdn-diagrams");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
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

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit file, which must exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Export settings derived from this configuration.
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            dpi: self.output.dpi,
            bbox: self.output.bbox,
            pad_inches: self.output.pad_inches,
            font_family: self.font.family.clone(),
        }
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
