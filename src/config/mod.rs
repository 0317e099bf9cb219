//! Configuration system
//!
//! Handles TOML config file parsing and environment variable overrides.

pub mod file;

pub use file::ConfigFile;

use serde::{Deserialize, Serialize};

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// API endpoint and credential settings
    pub api: ApiConfig,
}

/// API configuration
///
/// Credentials default to empty strings: an unauthenticated request is
/// simply sent, and the API's own rejection flows through the normal
/// status handling path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the road status API
    pub base_url: String,
    /// Application id credential (query parameter `app_id`)
    pub app_id: String,
    /// Application key credential (query parameter `app_key`)
    pub app_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id: String::new(),
            app_key: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from files and the process environment
    ///
    /// Resolution order: explicit file named by `ROADSTATUS_CONFIG`, else
    /// the first readable default path, else built-in defaults. Environment
    /// variables override whatever the file provided.
    pub fn load() -> Self {
        let mut config = match std::env::var("ROADSTATUS_CONFIG") {
            Ok(path) => ConfigFile::load(&path).unwrap_or_else(|e| {
                log::warn!("failed to load {}: {}", path, e);
                Config::default()
            }),
            Err(_) => ConfigFile::load_default().unwrap_or_default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Apply environment overrides through an injectable lookup
    pub fn apply_env(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(url) = get("ROADSTATUS_BASE_URL") {
            self.api.base_url = url;
        }
        if let Some(id) = get("ROADSTATUS_APP_ID") {
            self.api.app_id = id;
        }
        if let Some(key) = get("ROADSTATUS_APP_KEY") {
            self.api.app_key = key;
        }
    }
}
