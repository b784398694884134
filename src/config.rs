//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Prediction endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

/// Request timeout used when nothing else is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the configured endpoint
pub const ENDPOINT_ENV: &str = "HOUSE_PRICE_ENDPOINT";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Prediction service URL
    pub endpoint: Option<String>,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

/// Resolved runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub request_timeout: Duration,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "house-price", "house-price-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Path of the log file, next to the app's local data
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("house-price-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Resolve settings, letting `HOUSE_PRICE_ENDPOINT` win over the file
    pub fn settings(&self) -> Settings {
        self.settings_with_override(std::env::var(ENDPOINT_ENV).ok())
    }

    fn settings_with_override(&self, endpoint_override: Option<String>) -> Settings {
        let endpoint = endpoint_override
            .filter(|e| !e.trim().is_empty())
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Settings {
            endpoint,
            request_timeout: Duration::from_secs(
                self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        TuiConfig::default().settings_with_override(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.endpoint.is_none());
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            endpoint: Some("http://predictor.local/predict".to_string()),
            request_timeout_secs: Some(5),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.endpoint,
            Some("http://predictor.local/predict".to_string())
        );
        assert_eq!(parsed.request_timeout_secs, Some(5));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.endpoint.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"endpoint": "http://x/predict", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.endpoint, Some("http://x/predict".to_string()));
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_settings_from_file_values() {
        let config = TuiConfig {
            endpoint: Some("http://file/predict".to_string()),
            request_timeout_secs: Some(3),
        };
        let settings = config.settings_with_override(None);
        assert_eq!(settings.endpoint, "http://file/predict");
        assert_eq!(settings.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_env_override_wins() {
        let config = TuiConfig {
            endpoint: Some("http://file/predict".to_string()),
            ..Default::default()
        };
        let settings = config.settings_with_override(Some("http://env/predict".to_string()));
        assert_eq!(settings.endpoint, "http://env/predict");
    }

    #[test]
    fn test_blank_env_override_ignored() {
        let config = TuiConfig::default();
        let settings = config.settings_with_override(Some("  ".to_string()));
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_load_returns_ok() {
        // Falls back to defaults when no config file exists
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_paths_do_not_panic() {
        let _config = TuiConfig::config_path();
        let _log = TuiConfig::log_path();
    }
}
