//! Host configuration, read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `EXPLORER_HOST` | `127.0.0.1` |
//! | `EXPLORER_PORT` | `8080` |
//! | `QUERY_SERVICE_URL` | `http://localhost:5001` |
//! | `EXPLORER_OPEN_BROWSER` | `true` |

use common::model::config::{ExplorerConfig, DEFAULT_QUERY_SERVICE_URL};
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("EXPLORER_PORT must be a port number, got `{0}`")]
    InvalidPort(String),

    #[error("{name} must be true or false, got `{value}`")]
    InvalidFlag { name: &'static str, value: String },

    #[error("QUERY_SERVICE_URL must not be empty")]
    EmptyQueryServiceUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    /// Handed to the frontend; the host never calls it.
    pub query_service_url: String,
    pub open_browser: bool,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("EXPLORER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("EXPLORER_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let query_service_url = lookup("QUERY_SERVICE_URL")
            .unwrap_or_else(|| DEFAULT_QUERY_SERVICE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        if query_service_url.is_empty() {
            return Err(ConfigError::EmptyQueryServiceUrl);
        }

        let open_browser = match lookup("EXPLORER_OPEN_BROWSER") {
            Some(raw) => parse_flag("EXPLORER_OPEN_BROWSER", &raw)?,
            None => true,
        };

        Ok(Self {
            host,
            port,
            query_service_url,
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn explorer_config(&self) -> ExplorerConfig {
        ExplorerConfig {
            query_service_url: self.query_service_url.clone(),
        }
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = HostConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert_eq!(config.query_service_url, DEFAULT_QUERY_SERVICE_URL);
        assert!(config.open_browser);
    }

    #[test]
    fn overrides_are_read_and_normalized() {
        let config = HostConfig::from_lookup(lookup(&[
            ("EXPLORER_HOST", "0.0.0.0"),
            ("EXPLORER_PORT", " 9000 "),
            ("QUERY_SERVICE_URL", "http://query.internal:5001/"),
            ("EXPLORER_OPEN_BROWSER", "off"),
        ]))
        .unwrap();
        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert_eq!(
            config.explorer_config().query_service_url,
            "http://query.internal:5001"
        );
        assert!(!config.open_browser);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            HostConfig::from_lookup(lookup(&[("EXPLORER_PORT", "http")])),
            Err(ConfigError::InvalidPort("http".into()))
        );
        assert!(matches!(
            HostConfig::from_lookup(lookup(&[("EXPLORER_OPEN_BROWSER", "maybe")])),
            Err(ConfigError::InvalidFlag { .. })
        ));
        assert_eq!(
            HostConfig::from_lookup(lookup(&[("QUERY_SERVICE_URL", " / ")])),
            Err(ConfigError::EmptyQueryServiceUrl)
        );
    }
}
