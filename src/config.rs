//! Environment-backed configuration for the upstream vehicle-data API.
//!
//! Three values are required and read once at startup; a missing or
//! blank variable is a fatal error naming the variable.

use crate::shared::error::CatalogError;
use crate::shared::Result;

pub const ENV_BASE_URL: &str = "BLINKER_API_BASE_URL";
pub const ENV_API_KEY: &str = "BLINKER_RAPIDAPI_KEY";
pub const ENV_API_HOST: &str = "BLINKER_RAPIDAPI_HOST";

/// Connection settings for the upstream API.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the vehicle-data API, without a trailing slash.
    pub base_url: String,
    /// Value for the `x-rapidapi-key` header.
    pub api_key: String,
    /// Value for the `x-rapidapi-host` header.
    pub api_host: String,
}

impl Config {
    /// Reads the three required values from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = require(&lookup, ENV_BASE_URL)?;
        let api_key = require(&lookup, ENV_API_KEY)?;
        let api_host = require(&lookup, ENV_API_HOST)?;

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CatalogError::InvalidConfig {
                name: ENV_BASE_URL.to_string(),
                reason: format!("expected an http(s) URL, got \"{}\"", base_url),
            }
            .into());
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            api_host,
        })
    }
}

fn require(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(CatalogError::MissingConfig {
            name: name.to_string(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_config_complete() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_BASE_URL, "https://carapi.example.com"),
            (ENV_API_KEY, "secret-key"),
            (ENV_API_HOST, "carapi.example.com"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://carapi.example.com");
        assert_eq!(config.api_key, "secret-key");
        assert_eq!(config.api_host, "carapi.example.com");
    }

    #[test]
    fn test_config_strips_trailing_slash() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_BASE_URL, "https://carapi.example.com/"),
            (ENV_API_KEY, "k"),
            (ENV_API_HOST, "h"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://carapi.example.com");
    }

    #[test]
    fn test_config_missing_base_url() {
        let result = Config::from_lookup(lookup_from(&[
            (ENV_API_KEY, "k"),
            (ENV_API_HOST, "h"),
        ]));

        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Missing required environment variable"));
        assert!(err.contains(ENV_BASE_URL));
    }

    #[test]
    fn test_config_blank_value_counts_as_missing() {
        let result = Config::from_lookup(lookup_from(&[
            (ENV_BASE_URL, "https://carapi.example.com"),
            (ENV_API_KEY, "   "),
            (ENV_API_HOST, "h"),
        ]));

        let err = format!("{}", result.unwrap_err());
        assert!(err.contains(ENV_API_KEY));
    }

    #[test]
    fn test_config_rejects_non_http_base_url() {
        let result = Config::from_lookup(lookup_from(&[
            (ENV_BASE_URL, "ftp://carapi.example.com"),
            (ENV_API_KEY, "k"),
            (ENV_API_HOST, "h"),
        ]));

        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Invalid configuration value"));
        assert!(err.contains("http(s)"));
    }
}
