//! Runtime configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::backend::utils::paths::get_config_path;
use crate::utils::Result;

/// Environment variable overriding [`ApiConfig::base_url`].
pub const API_URL_ENV: &str = "TIMNHA_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app_name: String,
    pub api: ApiConfig,
    pub window: WindowSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f64,
    pub height: f64,
    pub resizable: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "timnha".to_string(),
            api: ApiConfig::default(),
            window: WindowSettings::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.timnha.vn/api".to_string(),
            timeout_secs: 15,
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 860.0,
            resizable: true,
        }
    }
}

impl AppConfig {
    /// Loads the config from the application directory, then applies env overrides.
    ///
    /// A missing or unreadable file yields the defaults; the override applies either way.
    pub fn load() -> Self {
        let path = get_config_path().map_err(Into::into);
        Self::load_with(path, std::env::var(API_URL_ENV).ok())
    }

    fn load_with(path: Result<PathBuf>, api_url: Option<String>) -> Self {
        let mut config = path
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_else(|e| {
                log::error!("Failed to load config: {e}, using defaults");
                Self::default()
            });
        config.apply_env_override(api_url);
        config
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content).map_err(|e| {
            crate::simple_error!("Invalid config file {}: {}", path.display(), e)
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn apply_env_override(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            log::info!("API base URL overridden from {API_URL_ENV}");
            self.api.base_url = url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("timnha-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("timnha-definitely-missing.json");
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = scratch_file("partial.json", r#"{ "api": { "base_url": "http://localhost:3000" } }"#);
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.app_name, "timnha");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = scratch_file("broken.json", "{ not json");
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config file"));
    }

    #[test]
    fn malformed_file_still_honours_env_override() {
        let path = scratch_file("broken-with-env.json", "{ broken");
        let config = AppConfig::load_with(Ok(path), Some("http://10.0.2.2:8080/api".into()));
        assert_eq!(config.api.base_url, "http://10.0.2.2:8080/api");
        assert_eq!(config.app_name, "timnha");
    }

    #[test]
    fn missing_app_dir_still_honours_env_override() {
        let config = AppConfig::load_with(
            Err(crate::simple_error!("no home directory")),
            Some("http://localhost:3000/api".into()),
        );
        assert_eq!(config.api.base_url, "http://localhost:3000/api");
    }

    #[test]
    fn env_override_replaces_base_url() {
        let mut config = AppConfig::default();
        config.apply_env_override(Some("http://10.0.2.2:8080/api".into()));
        assert_eq!(config.api.base_url, "http://10.0.2.2:8080/api");

        config.apply_env_override(Some("   ".into()));
        assert_eq!(config.api.base_url, "http://10.0.2.2:8080/api");
    }
}
