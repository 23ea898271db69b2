//! Resource read errors.

use thiserror::Error;

use crate::core::backend::BackendError;

/// Errors raised while reading a resource.
///
/// `NotFound` maps to the MCP resource-not-found code; the other variants
/// are internal errors from the client's point of view.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The URI matches neither a resource nor a template.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The menu could not be fetched.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// The backend answered with something that is not a menu.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResourceError {
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
