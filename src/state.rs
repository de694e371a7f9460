//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and one pooled `reqwest::Client` reused by every
//! proxied request.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<HostConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
