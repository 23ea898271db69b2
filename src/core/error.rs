//! Crate-wide error type.
//!
//! Each layer has its own error enum; [`Error`] gathers them so library
//! callers can use a single `Result` alias. The binary converts it into
//! `anyhow::Error` at the top.

use thiserror::Error;

use crate::core::backend::BackendError;
use crate::core::transport::TransportError;
use crate::domains::{prompts::PromptError, resources::ResourceError, tools::ToolError};

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Any failure the server can report.
#[derive(Debug, Error)]
pub enum Error {
    /// The backend client could not be built or a request failed.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// A tool could not be dispatched.
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// A resource could not be read.
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    /// A prompt could not be rendered.
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// The transport failed to start or stopped with an error.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}
