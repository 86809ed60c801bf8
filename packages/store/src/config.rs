//! # Client configuration — `recipefeed.toml`
//!
//! The web binary bundles a small TOML document at compile time and parses it
//! at startup. It names the backend the client talks to and the storage key
//! the session credential is persisted under.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"
//!
//! [session]
//! storage_key = "token"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. TOML parsing, a lenient loader and builder helpers. |
//! | [`ApiConfig`] | Backend section — `base_url` of the recipe API. |
//! | [`SessionConfig`] | Session section — `storage_key` for the persisted credential. |
//!
//! All structs derive or implement `Default` so a missing section or an empty
//! document is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration bundled as `recipefeed.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Backend API configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the recipe API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Session persistence configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Key the bearer credential is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_storage_key() -> String {
    "token".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The well-known filename for the bundled config.
    pub fn filename() -> &'static str {
        "recipefeed.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Parse from TOML, falling back to defaults when the document is malformed.
    pub fn load(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Invalid {}: {e}", Self::filename());
                Self::default()
            }
        }
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
    fn test_empty_document_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.session.storage_key, "token");
    }

    #[test]
    fn test_partial_document() {
        let config =
            ClientConfig::from_toml("[api]\nbase_url = \"https://recipes.example/\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://recipes.example");
        assert_eq!(config.session.storage_key, "token");
    }

    #[test]
    fn test_load_falls_back_on_garbage() {
        let config = ClientConfig::load("[api\nbase_url = ");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_to_toml_parses_back() {
        let config = ClientConfig::default().with_base_url("http://10.0.0.2:3000/");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
