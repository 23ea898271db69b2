//! Tool dispatch errors.
//!
//! A backend failure is not a dispatch error: it is reported to the agent
//! inside the tool result. [`ToolError::Backend`] exists so that result text
//! is produced in one place.

use thiserror::Error;

use crate::core::backend::BackendError;

/// Errors raised while dispatching a tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool is registered under this name.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The arguments do not match the tool's input schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The backend call behind the tool failed.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl ToolError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
