//! Prompt templates and their rendering.
//!
//! The syntax is deliberately small:
//! - `{{name}}` is replaced with the argument value, or removed when unset
//! - `{{#if name}}...{{/if}}` keeps its body only when `name` is non-empty
//! - `{{#if name}}...{{else}}...{{/if}}` picks one of two bodies
//!
//! Conditionals do not nest.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

const IF_OPEN: &str = "{{#if ";
const ELSE: &str = "{{else}}";
const IF_CLOSE: &str = "{{/if}}";

/// Argument check run before rendering a prompt.
pub type ArgumentPreparer =
    fn(HashMap<String, String>) -> Result<HashMap<String, String>, PromptError>;

/// Preparer that accepts arguments unchanged.
pub fn accept_arguments(
    arguments: HashMap<String, String>,
) -> Result<HashMap<String, String>, PromptError> {
    Ok(arguments)
}

/// A registered prompt: metadata, template text and follow-up tools.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<PromptArgument>,
    pub template: String,

    /// Tools an agent is expected to call while following the prompt.
    pub suggested_tools: Vec<String>,

    /// Checks and normalizes arguments before rendering.
    pub prepare: ArgumentPreparer,
}

impl PromptTemplate {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
            suggested_tools: Vec::new(),
            prepare: accept_arguments,
        }
    }

    /// Attach the tools suggested alongside this prompt.
    pub fn with_suggested_tools(mut self, tools: &[&str]) -> Self {
        self.suggested_tools = tools.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Attach an argument preparer.
    pub fn with_preparer(mut self, prepare: ArgumentPreparer) -> Self {
        self.prepare = prepare;
        self
    }

    /// Render the template followed by the suggested tools line.
    pub fn render_with_suggestions(
        &self,
        arguments: &HashMap<String, String>,
    ) -> Result<String, PromptError> {
        let mut text = self.render(arguments)?;
        if !self.suggested_tools.is_empty() {
            text.push_str("\n\nSuggested tools: ");
            text.push_str(&self.suggested_tools.join(", "));
        }
        Ok(text)
    }

    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let expanded = expand_conditionals(&self.template, arguments)?;
        Ok(substitute(&expanded, arguments))
    }
}

fn is_set(arguments: &HashMap<String, String>, name: &str) -> bool {
    arguments.get(name).is_some_and(|v| !v.is_empty())
}

/// Resolve every `{{#if}}` block, left to right.
fn expand_conditionals(
    template: &str,
    arguments: &HashMap<String, String>,
) -> Result<String, PromptError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(IF_OPEN) {
        out.push_str(&rest[..start]);

        let after_open = &rest[start + IF_OPEN.len()..];
        let name_end = after_open
            .find("}}")
            .ok_or_else(|| PromptError::template("Unclosed {{#if}} tag"))?;
        let name = after_open[..name_end].trim();

        let body = &after_open[name_end + 2..];
        let body_end = body
            .find(IF_CLOSE)
            .ok_or_else(|| PromptError::template("Missing {{/if}} tag"))?;
        let block = &body[..body_end];
        let (when_set, when_unset) = block.split_once(ELSE).unwrap_or((block, ""));

        out.push_str(if is_set(arguments, name) {
            when_set
        } else {
            when_unset
        });
        rest = &body[body_end + IF_CLOSE.len()..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Replace `{{name}}` placeholders. Unknown names render as nothing; tags
/// containing `#` or `/` are left alone. Argument values are inserted
/// verbatim and never rescanned.
fn substitute(text: &str, arguments: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start..].find("}}") else {
            break;
        };
        let end = start + len + 2;
        let tag = &rest[start + 2..start + len];

        out.push_str(&rest[..start]);
        if tag.contains(['#', '/']) {
            out.push_str(&rest[start..end]);
        } else if let Some(value) = arguments.get(tag.trim()) {
            out.push_str(value);
        }
        rest = &rest[end..];
    }

    out.push_str(rest);
    out
}
