//! Order tracking prompt.

use std::collections::HashMap;

use super::PromptDefinition;
use crate::domains::prompts::PromptError;
use rmcp::model::PromptArgument;

/// Helps a customer follow an order.
pub struct TrackOrderPrompt;

impl PromptDefinition for TrackOrderPrompt {
    const NAME: &'static str = "track_order_prompt";
    const DESCRIPTION: &'static str = "Help customer track their order";

    fn template() -> &'static str {
        "I'll check the status of order #{{order_id}} for you.

I can provide:
- Current order status
- Order items and total
- Estimated completion/delivery time
- Complete order journey/history

What would you like to know about your order?"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![PromptArgument {
            name: "order_id".to_string(),
            title: None,
            description: Some("ID of the order to track".to_string()),
            required: Some(true),
        }]
    }

    fn suggested_tools() -> &'static [&'static str] {
        &["get_order_details", "get_order_journey"]
    }

    /// `order_id` must be an integer; it is rendered in canonical form.
    fn prepare(
        mut arguments: HashMap<String, String>,
    ) -> Result<HashMap<String, String>, PromptError> {
        let raw = arguments
            .get("order_id")
            .ok_or_else(|| PromptError::missing_argument("order_id"))?;
        let order_id: i64 = raw
            .trim()
            .parse()
            .map_err(|_| PromptError::invalid_argument("order_id", "must be an integer"))?;
        arguments.insert("order_id".to_string(), order_id.to_string());
        Ok(arguments)
    }
}
