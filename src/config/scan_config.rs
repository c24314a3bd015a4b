use serde::{Deserialize, Serialize};

use crate::core::bluetooth::{
    BLUETOOTH_READY_TIMEOUT_SECS, DEFAULT_SCAN_DURATION_SECS, ScanOptions,
};

/// Defaults for the "Get Bluetooth Devices" action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Scan duration used when the caller does not pass one, in seconds
    pub default_duration_secs: f64,
    /// Whether unnamed devices are included when the caller does not say
    pub include_unnamed_devices: bool,
    /// How long to wait for the adapter to become available, in seconds
    pub ready_timeout_secs: u64,
    /// Bring the app to the foreground while scanning.
    /// Mobile platforms do not allow scanning for arbitrary devices in the background.
    pub foreground_scanning: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            default_duration_secs: DEFAULT_SCAN_DURATION_SECS,
            include_unnamed_devices: false,
            ready_timeout_secs: BLUETOOTH_READY_TIMEOUT_SECS,
            foreground_scanning: cfg!(any(target_os = "ios", target_os = "android")),
        }
    }
}

impl ScanConfig {
    /// Scan options with the caller's values, falling back to the configured defaults.
    pub fn options(&self, duration_secs: Option<f64>, include_unnamed: Option<bool>) -> ScanOptions {
        ScanOptions::new(
            duration_secs.unwrap_or(self.default_duration_secs),
            include_unnamed.unwrap_or(self.include_unnamed_devices),
        )
    }

    pub fn ready_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.ready_timeout_secs)
    }
}
