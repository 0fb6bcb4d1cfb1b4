//! # Client configuration (`config.toml`)
//!
//! Where the notes API lives and where the desktop build keeps its local data.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3001"
//!
//! [storage]
//! namespace = "stickynotes"   # directory under the platform data dir
//! ```
//!
//! Every field has a default, so a missing or empty file equals
//! [`ClientConfig::default`]. The `STICKYNOTES_API_URL` environment variable
//! overrides `api.base_url` (see [`ClientConfig::with_env_overrides`]).

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable overriding [`ApiConfig::base_url`].
pub const API_URL_ENV: &str = "STICKYNOTES_API_URL";

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Remote notes API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the `/api/...` paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Local storage settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory name under the platform data dir (desktop only).
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

fn default_namespace() -> String {
    "stickynotes".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
        }
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "config.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read `path`, falling back to defaults if it is missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match Self::from_toml(&contents) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring malformed config file");
                Self::default()
            }
        }
    }

    /// Builder method to set the API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    /// Apply `STICKYNOTES_API_URL` when it is set and non-empty.
    pub fn with_env_overrides(self) -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => self.with_base_url(url.trim()),
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:3001");
        assert_eq!(config.storage.namespace, "stickynotes");
    }

    #[test]
    fn test_partial_file() {
        let config = ClientConfig::from_toml("[api]\nbase_url = \"https://notes.example.com\"\n")
            .unwrap();
        assert_eq!(config.api.base_url, "https://notes.example.com");
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default().with_base_url("https://a.example");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ClientConfig::filename());

        // Missing file
        assert_eq!(ClientConfig::load_or_default(&path), ClientConfig::default());

        // Malformed file
        std::fs::write(&path, "[api\nbase_url = ").unwrap();
        assert_eq!(ClientConfig::load_or_default(&path), ClientConfig::default());

        // Valid file
        std::fs::write(&path, "[storage]\nnamespace = \"notes-dev\"\n").unwrap();
        assert_eq!(ClientConfig::load_or_default(&path).storage.namespace, "notes-dev");
    }
}
