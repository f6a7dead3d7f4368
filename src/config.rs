//! Client configuration: REST base URL and session storage key.
//!
//! Natively the base URL comes from the `CHAT_API_BASE_URL` environment
//! variable at runtime; browser builds read it at compile time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::session::TOKEN_STORAGE_KEY;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/api";
pub const API_BASE_URL_ENV: &str = "CHAT_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every REST path is appended to, without a trailing slash.
    pub api_base_url: String,
    /// Storage key holding the bearer token.
    pub token_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), token_key: TOKEN_STORAGE_KEY.to_owned() }
    }
}

impl ClientConfig {
    /// Build config from the environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if `CHAT_API_BASE_URL` is set
    /// to something without an `http://` or `https://` scheme.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_base_url(read_base_url_env().as_deref())
    }

    /// Build config from an optional raw base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] for URLs without an HTTP scheme.
    pub fn from_base_url(raw: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = match raw.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => normalize_base_url(url)?,
            None => DEFAULT_API_BASE_URL.to_owned(),
        };
        Ok(Self { api_base_url, ..Self::default() })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

#[cfg(not(feature = "csr"))]
fn read_base_url_env() -> Option<String> {
    std::env::var(API_BASE_URL_ENV).ok()
}

#[cfg(feature = "csr")]
fn read_base_url_env() -> Option<String> {
    option_env!("CHAT_API_BASE_URL").map(str::to_owned)
}
