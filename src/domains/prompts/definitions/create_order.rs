//! Order placement prompt.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Walks a customer through placing an order.
pub struct CreateOrderPrompt;

impl PromptDefinition for CreateOrderPrompt {
    const NAME: &'static str = "create_order_prompt";
    const DESCRIPTION: &'static str = "Guide customer through placing an order";

    fn template() -> &'static str {
        r#"Hello{{#if customer_name}} {{customer_name}}{{/if}}! I'll help you place your order today.

To complete your order, I'll need to gather the following information:

1. **What would you like to order?**
   - Browse our menu by asking "show me the menu" or "what appetizers do you have?"
   - Add items one by one or tell me everything at once

2. **Order Type**
   - Dine-in
   - Takeaway
   - Delivery

3. **Delivery Address** (for delivery orders)
   - Where should we deliver your order?

4. **Special Instructions** (optional)
   - Any allergies, preferences, or special requests?

5. **Promo Code** (optional)
   - Do you have a promo code?

Let's start! What would you like to order?"#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![PromptArgument {
            name: "customer_name".to_string(),
            title: None,
            description: Some("Name of the customer".to_string()),
            required: Some(false),
        }]
    }

    fn suggested_tools() -> &'static [&'static str] {
        &["get_menu_items", "create_order", "apply_promo_code"]
    }
}
