//! HTTP surface of the relay
//!
//! `POST /push` receives GitLab push hooks, `GET /status` reports on the process.

pub mod stats;
pub mod webhook;

use axum::{Router, routing};

use crate::SharedState;

// Re-export handlers
pub use stats::status;
pub use webhook::handle_push;

pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/push", routing::post(handle_push))
        .route("/status", routing::get(status))
        .with_state(state)
}
