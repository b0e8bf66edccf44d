//! Transport-level errors reported by HTTP adapters.
//!
//! Adapters classify failures structurally (by the HTTP client's own error
//! kind), so callers never inspect message text to tell them apart.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request never reached the server (refused, DNS, reset, CORS)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    /// Request could not be built (bad URL, bad header)
    #[error("Invalid request: {0}")]
    Request(String),
}

impl ApiError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}
