//! Tools domain module.
//!
//! Tools are the callable surface of the server: each one maps typed
//! arguments onto a single backend request and hands back the decoded JSON.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations grouped by backend area
//! - `router.rs` - rmcp ToolRouter builder for the STDIO transport
//! - `registry.rs` - Central tool registry and name-based dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a unit struct implementing `BackendTool` in the matching file under
//!    `definitions/` (or a new one)
//! 2. Export it in `definitions/mod.rs`
//! 3. Add its route in `router.rs` using `with_route()`
//! 4. Register it in `registry.rs` (listing and dispatch)
//!
//! The router/registry consistency tests fail if step 3 or 4 is forgotten.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use definitions::BackendTool;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
