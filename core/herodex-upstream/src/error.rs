//! Upstream error types.

use thiserror::Error;

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Errors raised while talking to the upstream.
///
/// These never reach HTTP callers: a failed fetch is logged and reported
/// as "not found".
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}
