//! Webhook handler for GitLab push events

use axum::{
    body::Bytes,
    extract::State as AxumState,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

use crate::SharedState;
use crate::release::build_release_payload;
use crate::utils::{gitlab_token, verify_gitlab_token};
use crate::webhook::decode_push_event;

pub const INVALID_TOKEN_BODY: &str = "Invalid gitlab token";
pub const INVALID_PAYLOAD_BODY: &str = "Invalid push event payload";
pub const UNUSABLE_SHA_BODY: &str = "Push event has no usable checkout sha";

/// Handles the GitLab push hook POST request.
///
/// Once the event is turned into a release payload the dispatch runs on its
/// own task and the hook is acknowledged with an empty 200, whatever Sentry
/// later answers.
pub async fn handle_push(
    AxumState(state): AxumState<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if !verify_gitlab_token(&state.config.secret, gitlab_token(&headers)) {
        warn!("Rejected push hook: invalid gitlab token");
        return (StatusCode::UNAUTHORIZED, INVALID_TOKEN_BODY).into_response();
    }

    let event = match decode_push_event(&body) {
        Ok(event) => event,
        Err(e) => {
            warn!("Could not decode push hook: {}", e);
            return (StatusCode::BAD_REQUEST, INVALID_PAYLOAD_BODY).into_response();
        }
    };

    let payload = match build_release_payload(&event) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Skipping release for push hook: {}", e);
            return (StatusCode::UNPROCESSABLE_ENTITY, UNUSABLE_SHA_BODY).into_response();
        }
    };

    let delivery_id = Uuid::now_v7();
    let span = info_span!("dispatch", %delivery_id, version = %payload.version);
    info!(
        %delivery_id,
        sha = %payload.ref_,
        commits = payload.commits.len(),
        "Accepted push hook, dispatching release"
    );

    tokio::spawn(
        async move {
            if let Err(e) = state.dispatcher.dispatch(&payload).await {
                error!("RESPONSE ERROR:\n{}", e);
            }
        }
        .instrument(span),
    );

    StatusCode::OK.into_response()
}
