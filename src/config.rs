//! Application configuration resolved at build time.
//!
//! The browser has no process environment, so values are baked in by the
//! build via `option_env!` and parsed by [`AppConfig::from_values`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Errors produced while parsing configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The API base URL is not an absolute `http(s)` URL.
    #[error("invalid API base URL '{0}': expected http:// or https://")]
    InvalidBaseUrl(String),

    /// The request timeout is not a positive integer number of milliseconds.
    #[error("invalid request timeout '{0}': expected a positive integer (ms)")]
    InvalidTimeout(String),
}

/// Typed client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub api_base_url: String,
    /// Per-request timeout in milliseconds.
    pub request_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS }
    }
}

impl AppConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `NIHONGO_API_URL`: default `http://localhost:5000`
    /// - `NIHONGO_REQUEST_TIMEOUT_MS`: default 15000
    ///
    /// # Errors
    ///
    /// Returns an error if either value is present but malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("NIHONGO_API_URL"), option_env!("NIHONGO_REQUEST_TIMEOUT_MS"))
    }

    /// Parse raw optional values, applying defaults for absent or blank ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not `http(s)` or the timeout is
    /// not a positive integer.
    pub fn from_values(api_url: Option<&str>, timeout_ms: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = parse_base_url(api_url)?;
        let request_timeout_ms = parse_timeout(timeout_ms)?;
        Ok(Self { api_base_url, request_timeout_ms })
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = match raw.map(str::trim) {
        None | Some("") => return Ok(DEFAULT_API_BASE_URL.to_owned()),
        Some(v) => v,
    };
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(value.to_owned()));
    }
    Ok(value.trim_end_matches('/').to_owned())
}

fn parse_timeout(raw: Option<&str>) -> Result<u32, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_REQUEST_TIMEOUT_MS),
        Some(v) => match v.parse::<u32>() {
            Ok(ms) if ms > 0 => Ok(ms),
            _ => Err(ConfigError::InvalidTimeout(v.to_owned())),
        },
    }
}
