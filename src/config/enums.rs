//! Configuration enum types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the exported raster is bounded.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BBoxMode {
    /// Crop to the drawn content plus `pad_inches`
    #[default]
    Tight,
    /// Keep the full figure rectangle
    Figure,
}
