//! Application state management
//! This module defines the state shared by every action invocation.

use std::path::PathBuf;

use anyhow::Result;
use log::info;
use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::status::StatusBoard;

/// Global application state
pub struct AppState {
    /// Current settings
    pub config: Mutex<AppConfig>,
    /// Where the settings are stored
    pub config_dir: PathBuf,
    /// Status message shown while an action runs
    pub status: StatusBoard,
}

impl AppState {
    /// Creates a new AppState, loading the settings from `config_dir`
    pub async fn new(config_dir: PathBuf, status: StatusBoard) -> Result<Self> {
        info!("Loading config from {:?}...", config_dir);
        let config = AppConfig::load_config(&config_dir).await?;
        Ok(Self {
            config: Mutex::new(config),
            config_dir,
            status,
        })
    }

    /// Returns a copy of the current settings
    pub async fn config(&self) -> AppConfig {
        self.config.lock().await.clone()
    }

    /// Replaces the settings and writes them to disk
    pub async fn update_config(&self, config: AppConfig) -> Result<()> {
        config.save_config(&self.config_dir).await?;
        *self.config.lock().await = config;
        Ok(())
    }
}
