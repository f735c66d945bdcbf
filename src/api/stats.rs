//! Status API endpoint

use axum::{Json, extract::State as AxumState};
use serde::Serialize;

use crate::SharedState;

/// Server information
#[derive(Debug, Serialize)]
pub struct ServerStats {
    pub name: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub started_at: String,
}

/// Relay settings that are safe to expose
#[derive(Debug, Serialize)]
pub struct RelayStats {
    pub validation_enabled: bool,
    pub target_host: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub server: ServerStats,
    pub relay: RelayStats,
}

/// GET /status - Report uptime and relay settings.
/// Never includes the secret or the full target URL, which embeds a Sentry token.
pub async fn status(AxumState(state): AxumState<SharedState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        server: ServerStats {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: state.start_time.elapsed().as_secs(),
            started_at: state.started_at.to_rfc3339(),
        },
        relay: RelayStats {
            validation_enabled: state.config.validation_enabled(),
            target_host: state.config.target_host(),
        },
    })
}
