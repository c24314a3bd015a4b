//! Logging setup
//! The CLI logs through env_logger; the desktop shell also forwards records
//! to the frontend.

use log::LevelFilter;

/// Initializes env_logger, honouring `RUST_LOG` and defaulting to `level`.
pub fn init_env_logger(level: LevelFilter) {
    let env = env_logger::Env::default().default_filter_or(level.to_string());
    if env_logger::Builder::from_env(env).try_init().is_ok() {
        log::info!("Logging initialized");
    }
}

#[cfg(feature = "desktop")]
pub use tauri_logger::{LogMessage, TauriLogger};

#[cfg(feature = "desktop")]
mod tauri_logger {
    use chrono::Local;
    use log::{Level, Metadata, Record, SetLoggerError};
    use serde::Serialize;
    use tauri::Emitter;

    #[derive(Debug, Serialize, Clone)]
    pub struct LogMessage {
        level: String,
        message: String,
        timestamp: String,
    }

    /// Mirrors log records to stderr and to the frontend as `log-message` events
    pub struct TauriLogger {
        app_handle: tauri::AppHandle,
        level: Level,
    }

    impl TauriLogger {
        pub fn new(app_handle: tauri::AppHandle, level: Level) -> Self {
            Self { app_handle, level }
        }

        pub fn init(app_handle: tauri::AppHandle, level: Level) -> Result<(), SetLoggerError> {
            let logger: &'static TauriLogger = Box::leak(Box::new(TauriLogger::new(app_handle, level)));
            log::set_logger(logger).map(|()| log::set_max_level(level.to_level_filter()))
        }

        fn emit_log(&self, record: &Record) {
            let log_message = LogMessage {
                level: record.level().to_string(),
                message: record.args().to_string(),
                timestamp: Local::now().to_rfc3339(),
            };

            if let Err(e) = self.app_handle.emit("log-message", log_message) {
                eprintln!("Failed to emit log message: {}", e);
            }
        }
    }

    impl log::Log for TauriLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= self.level
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                eprintln!("[{}] {}", record.level(), record.args());
                self.emit_log(record);
            }
        }

        fn flush(&self) {}
    }
}
