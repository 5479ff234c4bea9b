//! Client configuration, loadable from TOML.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

/// Settings for [`Client`](crate::client::Client).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Deadline per round trip in milliseconds. 0 disables it.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_request_timeout() -> u64 {
    2000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: default_request_timeout(),
        }
    }
}

impl ClientConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(contents)?;
        Ok(config)
    }

    /// The per-request deadline, or `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_ms > 0).then(|| Duration::from_millis(self.request_timeout_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_empty_config() {
        let config = ClientConfig::from_toml_str("").unwrap();
        assert_eq!(config.request_timeout_ms, 2000); // default
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(2)));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn deserialize_custom_timeout() {
        let toml = r#"
request_timeout_ms = 750
"#;
        let config = ClientConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.request_timeout(), Some(Duration::from_millis(750)));
    }

    #[test]
    fn zero_disables_timeout() {
        let config = ClientConfig::from_toml_str("request_timeout_ms = 0").unwrap();
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn rejects_wrong_type() {
        assert!(ClientConfig::from_toml_str(r#"request_timeout_ms = "fast""#).is_err());
    }

    #[test]
    fn missing_file_is_error() {
        assert!(ClientConfig::from_file("/nonexistent/obd-client.toml").is_err());
    }
}
