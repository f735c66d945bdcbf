//! Outbound delivery of release payloads to Sentry

use std::time::Duration;

use reqwest::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;
use tracing::info;

use crate::error::{RelayError, Result};
use crate::release::ReleasePayload;

/// What the release endpoint answered. Logged, never acted upon.
#[derive(Debug, Clone)]
pub struct DispatchReceipt {
    pub status: u16,
    pub body: String,
}

/// Posts release payloads to a fixed target URL.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: HttpClient,
    target_url: String,
}

impl Dispatcher {
    pub fn new(target_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("gitlab_sentry_relay/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            target_url: target_url.into(),
        })
    }

    /// Single POST of `payload` as JSON. No retry; any status counts as delivered.
    pub async fn dispatch(&self, payload: &ReleasePayload) -> Result<DispatchReceipt> {
        let body = serde_json::to_string(payload).map_err(RelayError::Serialization)?;
        info!("REQUEST:\n{}", body);

        let response = self
            .client
            .post(&self.target_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        info!(status, "RESPONSE:\n{}", body);

        Ok(DispatchReceipt { status, body })
    }
}
