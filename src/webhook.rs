//! GitLab push event structures
//!
//! Only the fields the relay forwards are modelled; serde skips everything
//! else in the hook body. Missing or `null` values fall back to their
//! `Default` so a sparse payload still decodes.

use serde::{Deserialize, Deserializer};

use crate::error::{RelayError, Result};

/// One push notification as delivered to `/push`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PushEvent {
    #[serde(rename = "checkout_sha", default, deserialize_with = "null_as_default")]
    pub sha: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repository: RepositoryInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub commits: Vec<CommitInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RepositoryInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub homepage: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommitInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    /// ISO-8601 as sent by GitLab, never parsed.
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: AuthorInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthorInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

/// Treats an explicit JSON `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a raw hook body into a [`PushEvent`].
pub fn decode_push_event(body: &[u8]) -> Result<PushEvent> {
    serde_json::from_slice(body).map_err(RelayError::InvalidPayload)
}
