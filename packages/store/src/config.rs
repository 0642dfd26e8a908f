//! # Application configuration — `taskverse.toml`
//!
//! Client-side configuration, read from the app data directory on native
//! platforms (the web build uses the defaults). Currently it only locates
//! the backend:
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//! ```
//!
//! All structs derive `Default` with production defaults, so a missing or
//! empty file behaves exactly like the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `taskverse.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl AppConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: String) -> Self {
        Self {
            api: ApiConfig { base_url },
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "taskverse.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::new("https://api.example.com".to_string());
        let text = config.to_toml().unwrap();
        let loaded = AppConfig::from_toml(&text).unwrap();
        assert_eq!(loaded.api.base_url, "https://api.example.com");
    }
}
