//! Backend client error types.

use thiserror::Error;

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors raised while talking to the restaurant backend.
///
/// Transport failures and non-2xx responses are both reported through this
/// type. Callers that only need "did it work" can match on the whole enum;
/// [`BackendError::status`] exposes the status code when the backend answered.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend answered with a status outside 200-299.
    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response (timeout, refused, DNS).
    #[error("Backend request failed: {0}")]
    Request(String),

    /// The response body could not be decoded as JSON.
    #[error("Invalid backend response: {0}")]
    Decode(String),

    /// The client could not be built from the supplied configuration.
    #[error("Invalid backend configuration: {0}")]
    Config(String),
}

impl BackendError {
    /// Create a status error from a response code and body.
    pub fn status_error(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status code, when the backend produced a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body, when the backend produced a response.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
