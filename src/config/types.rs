//! Configuration type definitions.

use super::enums::BBoxMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output location and raster settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Directory the PNG files are written to. It must already exist.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Output resolution in dots per inch (valid range: 36 - 1200)
    #[serde(default = "default_dpi")]
    pub dpi: f64,

    /// Crop mode: "tight" trims to the drawn content, "figure" keeps the full figure
    #[serde(default)]
    pub bbox: BBoxMode,

    /// Padding around the content for tight crops, in inches (valid range: 0.0 - 2.0)
    #[serde(default = "default_pad_inches")]
    pub pad_inches: f64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            dpi: default_dpi(),
            bbox: BBoxMode::default(),
            pad_inches: default_pad_inches(),
        }
    }
}

/// Text rendering settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct FontConfig {
    /// Font family name for every label (e.g., "DejaVu Sans", "Liberation Sans")
    /// Pango falls back to a similar installed font when it is missing
    #[serde(default = "default_font_family")]
    pub family: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: default_font_family(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("diagrams")
}

fn default_dpi() -> f64 {
    300.0
}

fn default_pad_inches() -> f64 {
    0.1
}

fn default_font_family() -> String {
    crate::draw::font::DEFAULT_FAMILY.to_string()
}
