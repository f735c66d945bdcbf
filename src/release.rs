//! Sentry release payload and the push-to-release mapping

use serde::Serialize;

use crate::error::{RelayError, Result};
use crate::webhook::{CommitInfo, PushEvent};

/// Number of sha characters used as the Sentry release version.
pub const SHORT_SHA_LEN: usize = 7;

/// Body POSTed to the Sentry release webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleasePayload {
    pub version: String,
    #[serde(rename = "ref")]
    pub ref_: String,
    pub url: String,
    pub commits: Vec<ReleaseCommit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseCommit {
    pub id: String,
    pub message: String,
    pub author_name: String,
    pub author_email: String,
    pub timestamp: String,
}

impl From<&CommitInfo> for ReleaseCommit {
    fn from(commit: &CommitInfo) -> Self {
        Self {
            id: commit.id.clone(),
            message: commit.message.clone(),
            author_name: commit.author.name.clone(),
            author_email: commit.author.email.clone(),
            timestamp: commit.timestamp.clone(),
        }
    }
}

/// Build the release payload for a push.
///
/// Fails with [`RelayError::ShortSha`] when the checkout sha has fewer than
/// [`SHORT_SHA_LEN`] characters, which is also what an empty or deleted-branch
/// push decodes to.
pub fn build_release_payload(event: &PushEvent) -> Result<ReleasePayload> {
    let version = short_sha(&event.sha).ok_or_else(|| RelayError::ShortSha {
        sha: event.sha.clone(),
        min_len: SHORT_SHA_LEN,
    })?;

    Ok(ReleasePayload {
        version: version.to_string(),
        ref_: event.sha.clone(),
        url: format!("{}/tree/{}", event.repository.homepage, event.sha),
        commits: event.commits.iter().map(ReleaseCommit::from).collect(),
    })
}

/// First [`SHORT_SHA_LEN`] characters of `sha`, cut on a char boundary.
fn short_sha(sha: &str) -> Option<&str> {
    match sha.char_indices().nth(SHORT_SHA_LEN) {
        Some((end, _)) => Some(&sha[..end]),
        None if sha.chars().count() == SHORT_SHA_LEN => Some(sha),
        None => None,
    }
}
