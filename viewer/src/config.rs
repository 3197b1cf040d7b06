//! Viewer configuration, read from the environment.

use newsletter_core::{ApiClient, DEFAULT_BASE_URL};

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "NEWSLETTER_API_URL";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid backend base URL {0:?}: expected an http:// or https:// URL")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub base_url: String,
}

impl ViewerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_base_url(std::env::var(BASE_URL_ENV).ok())
    }

    /// Build from an optional base URL. Unset or blank means the default.
    pub fn from_base_url(value: Option<String>) -> Result<Self, ConfigError> {
        let base_url = match value.map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => v,
            _ => DEFAULT_BASE_URL.to_string(),
        };
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }
        Ok(Self { base_url })
    }

    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(&self.base_url)
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
