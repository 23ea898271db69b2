//! The MCP surface of the restaurant backend, one module per capability.
//!
//! Tools and resources read and write through the shared backend client;
//! prompts are static templates.

pub mod prompts;
pub mod resources;
pub mod tools;
