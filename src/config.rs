use axum::http::HeaderValue;
use reqwest::Url;
use std::env;
use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: String,
    /// Storage service endpoint. A missing value is tolerated at startup and
    /// turns every submission into a relay failure.
    pub sheets_url: Option<Url>,
    pub allowed_origin: Option<HeaderValue>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(String),
    #[error("Invalid SHEETS_URL '{0}': {1}")]
    InvalidSheetsUrl(String, String),
    #[error("Invalid ALLOWED_ORIGIN: {0}")]
    InvalidOrigin(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = non_empty(ENV_SERVER_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = non_empty(ENV_SERVER_PORT).unwrap_or_else(|| DEFAULT_PORT.to_string());

        // Validate port is a valid number
        if port.parse::<u16>().is_err() {
            return Err(ConfigError::InvalidPort(port));
        }

        let sheets_url = match non_empty(ENV_SHEETS_URL) {
            Some(raw) => Some(
                Url::parse(raw.trim())
                    .map_err(|e| ConfigError::InvalidSheetsUrl(raw.clone(), e.to_string()))?,
            ),
            None => None,
        };

        let allowed_origin = match non_empty(ENV_ALLOWED_ORIGIN) {
            Some(raw) => Some(
                HeaderValue::from_str(raw.trim())
                    .map_err(|_| ConfigError::InvalidOrigin(raw.clone()))?,
            ),
            None => None,
        };

        Ok(Config {
            host,
            port,
            sheets_url,
            allowed_origin,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
