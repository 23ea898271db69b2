//! Resource definitions module.
//!
//! Each resource is defined with:
//! - URI (or URI template) and metadata
//! - Content provider
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement `ResourceDefinition` or `ResourceTemplateDefinition`
//! 3. Export it here
//! 4. Register in `registry.rs`

pub mod menu;

pub use menu::{MenuCategoryTemplate, MenuResource, MenuScope, render_menu};

use super::service::ResourceContent;

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata and content.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> ResourceContent;
}

/// Trait for parameterized resources addressed through a URI template.
pub trait ResourceTemplateDefinition {
    /// RFC 6570 URI template advertised to clients.
    const URI_TEMPLATE: &'static str;

    /// The display name of the template.
    const NAME: &'static str;

    /// Human-readable title.
    const TITLE: &'static str;

    /// A description of the template.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Resolve a concrete URI to its content, or `None` if the template does
    /// not match.
    fn resolve(uri: &str) -> Option<ResourceContent>;
}
