use std::io;

/// Custom error type for gitlab_sentry_relay operations
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid push event payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    #[error("Checkout sha '{sha}' is shorter than {min_len} characters")]
    ShortSha { sha: String, min_len: usize },

    #[error("Failed to serialize release payload: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Dispatch to release endpoint failed: {0}")]
    Dispatch(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Helper type for Results that use RelayError
pub type Result<T> = std::result::Result<T, RelayError>;
