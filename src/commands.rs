//! Tauri commands
//! This module defines the actions that can be invoked from the frontend.

use tauri::{AppHandle, State};

use crate::config::AppConfig;
use crate::core::bluetooth::{self, DeviceRecord};
use crate::core::geo::{self, Placemark};
use crate::desktop::DesktopHost;
use crate::state::AppState;

/// Converts a location to a geo URI
///
/// # Arguments
/// * `location` - The resolved place
/// * `include_accuracy` - Append the accuracy when it is known. Uses the configured default when omitted.
#[tauri::command]
pub async fn geo_uri(
    location: Placemark,
    include_accuracy: Option<bool>,
    app_state: State<'_, AppState>,
) -> Result<String, String> {
    let include_accuracy = match include_accuracy {
        Some(include) => include,
        None => app_state.config().await.geo.include_accuracy,
    };

    geo::geo_uri(&location, include_accuracy).map_err(|e| e.to_string())
}

/// Returns the Bluetooth devices in range
///
/// # Arguments
/// * `scan_duration` - Seconds to scan for, 0 to 25
/// * `include_unnamed_devices` - Also return devices without a name
///
/// Emits "status-message" while scanning and once more when it is cleared.
#[tauri::command]
pub async fn get_bluetooth_devices(
    app_handle: AppHandle,
    scan_duration: Option<f64>,
    include_unnamed_devices: Option<bool>,
    app_state: State<'_, AppState>,
) -> Result<Vec<DeviceRecord>, String> {
    let config = app_state.config().await;
    let options = config.scan.options(scan_duration, include_unnamed_devices);
    let host = DesktopHost::new(app_handle, &config.scan);

    bluetooth::get_bluetooth_devices(&host, &app_state.status, &options)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_status_message(app_state: State<'_, AppState>) -> Option<String> {
    app_state.status.message()
}

#[tauri::command]
pub async fn get_config(app_state: State<'_, AppState>) -> Result<AppConfig, String> {
    Ok(app_state.config().await)
}

#[tauri::command]
pub async fn save_config(config: AppConfig, app_state: State<'_, AppState>) -> Result<(), String> {
    app_state.update_config(config).await.map_err(|e| e.to_string())
}
