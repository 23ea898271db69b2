//! Prompt Registry - central registration of all prompts.
//!
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use super::definitions::{
    CreateOrderPrompt, OrderAssistancePrompt, PromptDefinition, TrackOrderPrompt,
};
use super::templates::PromptTemplate;

/// Build a PromptTemplate from a PromptDefinition.
fn build_template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplate::new(
        P::NAME,
        Some(P::DESCRIPTION.to_string()),
        P::arguments(),
        P::template(),
    )
    .with_suggested_tools(P::suggested_tools())
    .with_preparer(P::prepare)
}

/// Get all registered prompts as PromptTemplates.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        build_template::<CreateOrderPrompt>(),
        build_template::<TrackOrderPrompt>(),
        build_template::<OrderAssistancePrompt>(),
    ]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![
        CreateOrderPrompt::NAME,
        TrackOrderPrompt::NAME,
        OrderAssistancePrompt::NAME,
    ]
}
