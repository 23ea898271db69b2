//! Resources domain module.
//!
//! Resources are read-only documents an MCP client can pull into context.
//! This server exposes the restaurant menu, rendered as Markdown from live
//! backend data.
//!
//! ## Architecture
//!
//! - `definitions/` - Resource and template definitions
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file in `definitions/` (e.g., `my_resource.rs`)
//! 2. Implement `ResourceDefinition` or `ResourceTemplateDefinition`
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::{ResourceDefinition, ResourceTemplateDefinition};
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_uris};
pub use service::{ResourceContent, ResourceEntry, ResourceService};
