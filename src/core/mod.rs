//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server:
//! error handling, configuration, the backend HTTP client, the server handler
//! and the transport layer.

pub mod backend;
pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use backend::{BackendClient, BackendError};
pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
