//! Client configuration.
//!
//! A [`ClientConfig`] holds everything needed to build a
//! [`Client`](crate::Client): the API key, the base URL, the request timeout
//! and an optional user agent. It can be written by hand or loaded from a
//! YAML file:
//!
//! ```yaml
//! api_key: 0123456789abcdef
//! base_url: https://newsapi.org/v2/
//! timeout_secs: 10
//! ```
//!
//! Every field except `api_key` has a default, so an empty file is valid
//! as long as the key is supplied some other way (CLI flag, environment).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tokio::fs;
use tracing::{debug, instrument};

use crate::error::ConfigError;

/// Production endpoint of the service, including the API version.
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/";

/// Transport timeout applied when the caller does not bring a client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Settings used to build a [`Client`](crate::Client).
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Key sent in the `X-Api-Key` header.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

// The key stays out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Parse a YAML document. Missing fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML config file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Parse`]
    /// if it is not a valid config document.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;
        let config = Self::from_yaml_str(&yaml)?;
        debug!(?config, "Loaded client configuration");
        Ok(config)
    }

    /// The API key, if one is configured and non-empty.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://newsapi.org/v2/");
        assert_eq!(config.timeout_secs, 10);
        assert!(matches!(config.api_key(), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            ClientConfig::from_yaml_str("").unwrap(),
            ClientConfig::default()
        );
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = ClientConfig::from_yaml_str("api_key: abc123\ntimeout_secs: 3\n")
            .unwrap();
        assert_eq!(config.api_key().unwrap(), "abc123");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.user_agent, None);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = ClientConfig::from_yaml_str("timeout_secs: [1, 2]")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_api_key_is_missing() {
        let config = ClientConfig::from_yaml_str("api_key: ''").unwrap();
        assert!(matches!(config.api_key(), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig {
            api_key: Some("super-secret".to_string()),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key: from-file").unwrap();
        writeln!(file, "base_url: http://localhost:8080/v2/")
            .unwrap();

        let config = ClientConfig::load(file.path()).await.unwrap();
        assert_eq!(config.api_key().unwrap(), "from-file");
        assert_eq!(config.base_url, "http://localhost:8080/v2/");
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = ClientConfig::load("/definitely/not/here.yaml")
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
