//! Errors from the backend service

use thiserror::Error;

/// Failure talking to the backend.
///
/// All variants are recoverable from the wizard's point of view: the user is
/// told what happened and may retry.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The configured base URL or an endpoint path does not form a URL.
    #[error("invalid backend url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Connection, TLS, or timeout failure before a response arrived.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("{url} returned HTTP {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// The response body is not the JSON we expected.
    #[error("malformed response from {url}: {source}")]
    MalformedBody {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RemoteError {
    /// Short label for inline notices
    pub fn kind(&self) -> &'static str {
        match self {
            RemoteError::InvalidUrl { .. } => "configuration",
            RemoteError::Transport { .. } => "network",
            RemoteError::Status { .. } => "server",
            RemoteError::MalformedBody { .. } => "response",
        }
    }
}
