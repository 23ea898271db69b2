//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with:
//! - Metadata (name, description, arguments)
//! - Template string and suggested follow-up tools
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file (e.g., `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod create_order;
mod order_assistance;
mod track_order;

pub use create_order::CreateOrderPrompt;
pub use order_assistance::OrderAssistancePrompt;
pub use track_order::TrackOrderPrompt;

use std::collections::HashMap;

use rmcp::model::PromptArgument;

use super::error::PromptError;

/// Trait for prompt definitions.
///
/// Each prompt must implement this trait to provide its metadata and template.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The template string with {{variable}} placeholders.
    fn template() -> &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;

    /// Tools the agent should reach for while following the prompt.
    fn suggested_tools() -> &'static [&'static str];

    /// Check and normalize arguments before rendering.
    fn prepare(arguments: HashMap<String, String>) -> Result<HashMap<String, String>, PromptError> {
        Ok(arguments)
    }
}
