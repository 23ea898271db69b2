//! Restaurant Backend MCP Server
//!
//! This crate exposes a restaurant backend's REST API over the Model Context
//! Protocol (MCP): 24 tools forwarding to the backend, Markdown menu
//! resources and conversational prompts for the ordering flow.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the backend HTTP client, the
//!   server handler and the transports
//! - **domains**: the MCP surface, organized by kind
//!   - **tools**: callable backend operations
//!   - **resources**: the menu as readable documents
//!   - **prompts**: templates guiding ordering and tracking
//!
//! # Example
//!
//! ```rust,no_run
//! use restaurant_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{BackendClient, BackendError, Config, Error, McpServer, Result};
