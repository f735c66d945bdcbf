pub mod api;
pub mod cli;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod release;
pub mod utils;
pub mod webhook;

use chrono::{DateTime, Utc};
use reqwest::Url;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::dispatch::Dispatcher;
use crate::error::{RelayError, Result};

/// Settings resolved once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    /// Shared secret expected in `X-Gitlab-Token`. Empty disables the check.
    pub secret: String,
    /// Sentry release webhook URL.
    pub target_url: String,
    pub timeout: Duration,
}

impl RelayConfig {
    /// Returns true if inbound requests must carry the shared secret.
    pub fn validation_enabled(&self) -> bool {
        !self.secret.is_empty()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Host part of the target URL, safe to log or expose.
    pub fn target_host(&self) -> String {
        Url::parse(&self.target_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_owned))
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_url.is_empty() {
            return Err(RelayError::Config("sentry url must not be empty".to_string()));
        }
        let url = Url::parse(&self.target_url).map_err(|e| {
            RelayError::Config(format!("invalid sentry url '{}': {}", self.target_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RelayError::Config(format!(
                "sentry url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.timeout.is_zero() {
            return Err(RelayError::Config("timeout must be greater than zero".to_string()));
        }
        Ok(())
    }
}

pub struct AppState {
    pub config: RelayConfig,
    pub dispatcher: Dispatcher,
    pub start_time: Instant,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Result<Self> {
        config.validate()?;
        let dispatcher = Dispatcher::new(config.target_url.clone(), config.timeout)?;
        Ok(Self {
            config,
            dispatcher,
            start_time: Instant::now(),
            started_at: Utc::now(),
        })
    }
}

pub type SharedState = Arc<AppState>;
