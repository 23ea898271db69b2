//! Prompt error types.
//!
//! Every variant is the caller's fault: an unknown name, a missing or
//! malformed argument, or a broken template. Both transports report them as
//! invalid-params.

use thiserror::Error;

/// Errors raised while looking up or rendering a prompt.
#[derive(Debug, Error)]
pub enum PromptError {
    /// No prompt is registered under this name.
    #[error("Prompt not found: {0}")]
    NotFound(String),

    /// A required argument was not supplied.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// An argument was supplied but cannot be used.
    #[error("Invalid value for argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// The template itself is malformed.
    #[error("Template error: {0}")]
    Template(String),
}

impl PromptError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument(name.into())
    }

    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }
}
