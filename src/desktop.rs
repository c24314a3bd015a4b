//! Tauri host for the actions
//! Keeps the main window out of the way and brings it up while a scan runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use log::{error, info};
use tauri::{AppHandle, Manager, WebviewWindow};

#[cfg(target_os = "macos")]
use tauri::ActivationPolicy;

use crate::config::scan_config::ScanConfig;
use crate::core::bluetooth::{BluestCentral, Central};
use crate::error::ActionResult;
use crate::host::ActionHost;

/// Label of the window shown while scanning
pub const MAIN_WINDOW: &str = "main";

/// Event carrying the current status message
pub const STATUS_EVENT: &str = "status-message";

pub fn main_window(app: &AppHandle) -> Result<WebviewWindow> {
    app.get_webview_window(MAIN_WINDOW)
        .ok_or_else(|| anyhow!("Main window not found"))
}

/// Shows and focuses the main window.
pub fn show_main_window(app: &AppHandle) -> Result<()> {
    let window = main_window(app)?;
    window.show()?;
    window.set_focus()?;
    #[cfg(target_os = "macos")]
    app.set_activation_policy(ActivationPolicy::Regular)?;
    Ok(())
}

/// Hides the main window and drops out of the dock on macOS.
pub fn hide_main_window(app: &AppHandle) -> Result<()> {
    let window = main_window(app)?;
    window.hide()?;
    #[cfg(target_os = "macos")]
    app.set_activation_policy(ActivationPolicy::Accessory)?;
    Ok(())
}

/// Runs actions inside the Tauri app
pub struct DesktopHost {
    app_handle: AppHandle,
    ready_timeout: Duration,
    foreground: bool,
    was_hidden: AtomicBool,
}

impl DesktopHost {
    pub fn new(app_handle: AppHandle, scan_config: &ScanConfig) -> Self {
        Self {
            app_handle,
            ready_timeout: scan_config.ready_timeout(),
            foreground: scan_config.foreground_scanning,
            was_hidden: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl ActionHost for DesktopHost {
    async fn open_central(&self) -> ActionResult<Box<dyn Central>> {
        let central = BluestCentral::open(self.ready_timeout).await?;
        Ok(Box::new(central))
    }

    fn scans_in_foreground(&self) -> bool {
        self.foreground
    }

    fn bring_to_foreground(&self) -> Result<()> {
        let visible = main_window(&self.app_handle)?.is_visible()?;
        self.was_hidden.store(!visible, Ordering::SeqCst);
        info!("Bringing the app to the foreground for scanning");
        show_main_window(&self.app_handle)
    }

    fn return_to_caller(&self) {
        if self.was_hidden.swap(false, Ordering::SeqCst) {
            if let Err(e) = hide_main_window(&self.app_handle) {
                error!("Failed to hide the main window: {}", e);
            }
        }
    }
}
