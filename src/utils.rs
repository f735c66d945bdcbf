use axum::http::HeaderMap;

/// Header GitLab uses to carry the webhook secret token.
pub const GITLAB_TOKEN_HEADER: &str = "X-Gitlab-Token";

/// Checks the token sent by GitLab against the configured secret.
///
/// An empty `secret` turns validation off and every request is allowed,
/// including ones without the header. Otherwise the token must match
/// byte for byte.
pub fn verify_gitlab_token(secret: &str, token: Option<&[u8]>) -> bool {
    secret.is_empty() || token == Some(secret.as_bytes())
}

/// Raw bytes of the GitLab token header, whatever their encoding.
pub fn gitlab_token(headers: &HeaderMap) -> Option<&[u8]> {
    headers.get(GITLAB_TOKEN_HEADER).map(|v| v.as_bytes())
}
