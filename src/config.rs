//! Web host configuration parsed from environment variables.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("BACKEND_URL must start with http:// or https://, got {0}")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend origin without a trailing slash.
    pub backend_url: String,
    pub upstream_timeout_secs: u64,
}

impl HostConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://localhost:8000`
    /// - `UPSTREAM_TIMEOUT_SECS`: default 60
    ///
    /// # Errors
    ///
    /// Returns an error when `PORT` is not a port number or `BACKEND_URL` is
    /// not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let backend_url = lookup("BACKEND_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBackendUrl(backend_url));
        }

        let upstream_timeout_secs = lookup("UPSTREAM_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS);

        Ok(Self { port, backend_url, upstream_timeout_secs })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
