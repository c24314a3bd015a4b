//! Shortcut actions library
//! Converts locations to geo URIs and lists nearby Bluetooth devices. The
//! desktop shell and the CLI are thin hosts around this library.

// Module declarations
pub mod config;
pub mod core;
pub mod error;
pub mod host;
pub mod logging;
pub mod state;
pub mod status;

#[cfg(feature = "desktop")]
pub mod commands;
#[cfg(feature = "desktop")]
pub mod desktop;

pub use error::{ActionError, ActionResult};

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use log::{Level, LevelFilter, error};
    use tauri::{Emitter, Manager, WindowEvent};

    use crate::desktop::{STATUS_EVENT, hide_main_window};
    use crate::logging::TauriLogger;
    use crate::state::AppState;
    use crate::status::StatusBoard;

    let builder = tauri::Builder::default();

    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    let builder = builder.plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
        if let Err(e) = desktop::show_main_window(app) {
            error!("Failed to show the main window: {}", e);
        }
    }));

    builder
        // Register our commands
        .invoke_handler(tauri::generate_handler![
            commands::geo_uri,
            commands::get_bluetooth_devices,
            commands::get_status_message,
            commands::get_config,
            commands::save_config
        ])
        // Setup our application state
        .setup(|app| {
            if TauriLogger::init(app.handle().clone(), Level::Info).is_err() {
                // Only fall back to env_logger if TauriLogger could not be installed
                logging::init_env_logger(LevelFilter::Info);
            }

            let config_dir = app.path().app_config_dir()?;
            let status_handle = app.handle().clone();
            let status = StatusBoard::with_listener(move |message| {
                if let Err(e) = status_handle.emit(STATUS_EVENT, message) {
                    error!("Failed to emit {} event: {}", STATUS_EVENT, e);
                }
            });

            let app_state = tauri::async_runtime::block_on(AppState::new(config_dir, status))
                .map_err(|e| format!("Failed to initialize AppState: {}", e))?;
            app.manage(app_state);
            Ok(())
        })
        .on_window_event(|window, event| {
            if let WindowEvent::CloseRequested { api, .. } = event {
                api.prevent_close();
                if let Err(e) = hide_main_window(window.app_handle()) {
                    error!("Failed to hide the main window: {}", e);
                }
            }
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
