//! Runtime configuration.
//!
//! Everything has a compiled-in default. The only environment override is
//! `NOTES_API_URL`, the base URL of the remote note store.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;
use crate::url_validator::validate_base_url;

pub const DEFAULT_API_URL: &str = "https://note-taking-app-8n69.onrender.com/";
pub const API_URL_ENV: &str = "NOTES_API_URL";
pub const BIND_ADDR: &str = "127.0.0.1:3000";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Url,
    pub bind_addr: SocketAddr,
    pub request_timeout: Duration,
}

impl Config {
    /// Build a config for the given store URL with default bind address and
    /// timeout.
    pub fn with_api_url(api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: validate_base_url(api_url)?,
            bind_addr: BIND_ADDR.parse()?,
            request_timeout: REQUEST_TIMEOUT,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_api_url(&api_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url_is_valid() {
        let config = Config::with_api_url(DEFAULT_API_URL).unwrap();
        assert_eq!(config.api_url.as_str(), DEFAULT_API_URL);
        assert_eq!(config.bind_addr.to_string(), BIND_ADDR);
        assert_eq!(config.request_timeout, REQUEST_TIMEOUT);
    }

    #[test]
    fn test_bad_url_is_rejected() {
        assert!(matches!(
            Config::with_api_url("ftp://example.com"),
            Err(ConfigError::ApiUrl(_))
        ));
    }

    #[test]
    fn test_bind_addr_comes_from_constant() {
        let config = Config::with_api_url(DEFAULT_API_URL).unwrap();
        let expected: SocketAddr = BIND_ADDR.parse().unwrap();
        assert_eq!(config.bind_addr, expected);
    }
}
