//! Transport layer for the MCP server.
//!
//! - **STDIO**: standard input/output, the usual way agents launch MCP
//!   servers - feature: `stdio` (default)
//! - **HTTP**: JSON-RPC over POST for clients that cannot spawn processes -
//!   feature: `http`
//!
//! Each transport owns the connection lifecycle and hands protocol messages
//! to [`McpServer`](crate::core::McpServer).

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
