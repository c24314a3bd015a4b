use serde::{Deserialize, Serialize};

/// Defaults for the "Convert Location to Geo URI" action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    /// Even when enabled, accuracy is left out if it cannot be determined.
    pub include_accuracy: bool,
}

impl Default for GeoConfig {
    fn default() -> Self {
        GeoConfig {
            include_accuracy: true,
        }
    }
}
