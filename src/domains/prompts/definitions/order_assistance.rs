//! General order assistance prompt.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// Lists what the assistant can help with.
pub struct OrderAssistancePrompt;

impl PromptDefinition for OrderAssistancePrompt {
    const NAME: &'static str = "order_assistance_prompt";
    const DESCRIPTION: &'static str = "General order help and guidance";

    fn template() -> &'static str {
        "Welcome to our restaurant! I'm here to help you with:

**Ordering**
- Browse our menu
- Place new orders
- Modify existing orders

**Order Tracking**
- Check order status
- View order history
- Track delivery

**Account**
- Create/update profile
- Manage delivery addresses
- View past orders

**Promotions**
- Apply promo codes
- Check available offers

**Reviews**
- Rate your orders
- Leave feedback

How can I assist you today?"
    }

    fn arguments() -> Vec<PromptArgument> {
        Vec::new()
    }

    fn suggested_tools() -> &'static [&'static str] {
        &["get_menu_items", "create_order", "get_customer_orders", "get_order_details"]
    }
}
