//! Data types for PNG export.

use crate::config::BBoxMode;
use crate::draw::font::DEFAULT_FAMILY;
use std::path::PathBuf;
use thiserror::Error;

/// Settings that control rasterization of a canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Output resolution in dots per inch.
    pub dpi: f64,
    /// How the raster is cropped.
    pub bbox: BBoxMode,
    /// Padding around the content for tight crops, in inches.
    pub pad_inches: f64,
    /// Font family used for every text label.
    pub font_family: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            dpi: 300.0,
            bbox: BBoxMode::Tight,
            pad_inches: 0.1,
            font_family: DEFAULT_FAMILY.to_string(),
        }
    }
}

/// Errors that can occur while exporting a canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Cairo drawing error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Surface pixel data unavailable: {0}")]
    SurfaceData(String),

    #[error("Invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
