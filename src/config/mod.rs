pub mod geo_config;
pub mod scan_config;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::config::geo_config::GeoConfig;
use crate::config::scan_config::ScanConfig;
use crate::error::ActionResult;

const CONFIG_FILE_NAME: &str = "actions_config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scan: ScanConfig,
    pub geo: GeoConfig,
}

impl AppConfig {
    /// Loads the config from `config_dir`, falling back to defaults when there is no file.
    pub async fn load_config(config_dir: &Path) -> ActionResult<Self> {
        let file_path = config_dir.join(CONFIG_FILE_NAME);

        if !fs::try_exists(&file_path).await? {
            warn!("Config file not found at {:?}, using default.", file_path);
            return Ok(Self::default());
        }

        let config_json = fs::read_to_string(&file_path).await?;
        let config: Self = serde_json::from_str(&config_json)?;

        info!("Config loaded from {:?}", file_path);
        Ok(config)
    }

    /// Saves the config to `config_dir`, creating the directory if needed.
    pub async fn save_config(&self, config_dir: &Path) -> ActionResult<()> {
        fs::create_dir_all(config_dir).await?;

        let file_path = config_dir.join(CONFIG_FILE_NAME);
        let config_json = serde_json::to_string_pretty(self)?;

        fs::write(&file_path, config_json).await?;
        info!("Config saved to {:?}", file_path);
        Ok(())
    }
}

/// Config directory used outside the desktop shell.
pub fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "shortcut-actions").map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ActionError;

    fn test_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "shortcut-actions-{}-{}",
            name,
            std::process::id()
        ))
    }

    #[tokio::test]
    async fn test_missing_file_uses_defaults() {
        let dir = test_dir("missing");
        let config = AppConfig::load_config(&dir).await.unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(config.geo.include_accuracy);
        assert_eq!(config.scan.default_duration_secs, 5.0);
        assert!(!config.scan.include_unnamed_devices);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = test_dir("save");
        let mut config = AppConfig::default();
        config.scan.default_duration_secs = 12.0;
        config.scan.include_unnamed_devices = true;
        config.geo.include_accuracy = false;

        config.save_config(&dir).await.unwrap();
        let loaded = AppConfig::load_config(&dir).await.unwrap();
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_partial_file_fills_defaults() {
        let dir = test_dir("partial");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILE_NAME), r#"{"scan":{"ready_timeout_secs":3}}"#).unwrap();

        let loaded = AppConfig::load_config(&dir).await.unwrap();
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(loaded.scan.ready_timeout_secs, 3);
        assert_eq!(loaded.scan.default_duration_secs, 5.0);
        assert_eq!(loaded.geo, GeoConfig::default());
    }

    #[tokio::test]
    async fn test_malformed_file_is_config_error() {
        let dir = test_dir("malformed");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILE_NAME), "{ not json").unwrap();

        let result = AppConfig::load_config(&dir).await;
        let _ = std::fs::remove_dir_all(&dir);

        assert!(matches!(result, Err(ActionError::Config(_))));
    }

    #[tokio::test]
    async fn test_save_into_file_path_is_io_error() {
        let dir = test_dir("blocked");
        std::fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let result = AppConfig::default().save_config(&blocker).await;
        let _ = std::fs::remove_dir_all(&dir);

        assert!(matches!(result, Err(ActionError::Io(_))));
    }

    #[test]
    fn test_options_fall_back_to_config() {
        let scan = ScanConfig {
            default_duration_secs: 8.0,
            include_unnamed_devices: true,
            ..Default::default()
        };

        let options = scan.options(None, None);
        assert_eq!(options.duration_secs, 8.0);
        assert!(options.include_unnamed);

        let options = scan.options(Some(2.0), Some(false));
        assert_eq!(options.duration_secs, 2.0);
        assert!(!options.include_unnamed);
    }
}
