//! Error types for backend communication
//!
//! Separates "no response at all" from "a response we did not like" so that
//! callers choosing to absorb failures can still log what happened.

use thiserror::Error;

/// Result type alias for communicator calls
pub type Result<T> = std::result::Result<T, CommunicatorError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommunicatorError {
    /// The request never produced a response (connect, DNS, timeout, ...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded into the requested type
    #[error("Decode error: {0}")]
    Decode(String),

    /// The request body could not be serialized
    #[error("Encode error: {0}")]
    Encode(String),

    /// The HTTP client could not be built
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CommunicatorError {
    /// HTTP status carried by this error, if the backend answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Backend rejected the caller's credentials
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self.status_code(), Some(401) | Some(403))
    }
}
