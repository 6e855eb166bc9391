//! Error types for the newsroom SDK.

use thiserror::Error;

/// Main error type for the newsroom SDK.
///
/// The split mirrors how failures surface to callers: `Transport` and
/// `GraphQl` come back from the CMS endpoint, `Http` covers everything
/// below the protocol (DNS, TLS, timeouts), and the rest are local.
#[derive(Error, Debug)]
pub enum Error {
    /// Non-200 HTTP response from the CMS endpoint.
    #[error("transport error: HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    /// GraphQL response carried `errors` and no usable `data`.
    #[error("graphql error: {0}")]
    GraphQl(String),

    /// Connection-level failure (DNS, TLS, timeout, malformed response).
    #[error("http error: {0}")]
    Http(String),

    /// JSON (de)serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// HTTP status code, when this error originated from a non-200 response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this failure came back from the wire (as opposed to a
    /// local serialization/configuration problem).
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::GraphQl(_) | Self::Http(_)
        )
    }
}
