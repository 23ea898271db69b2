//! Tool Router - builds the rmcp ToolRouter used by the STDIO transport.
//!
//! Every route shares the same backend client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::backend::BackendClient;

use super::definitions::common::create_route;
use super::definitions::{
    ApplyPromoCodeTool, CheckBackendHealthTool, CreateMenuItemTool, CreateOrderTool,
    CreateReviewTool, CustomerLoginTool, GetCustomerOrdersTool, GetCustomerProfileTool,
    GetDashboardStatsTool, GetFilteredOrdersTool, GetMenuItemDetailsTool, GetMenuItemsTool,
    GetOrderDetailsTool, GetOrderJourneyTool, GetOrderReviewsTool, GetOrdersByStatusTool,
    GetPopularItemsTool, GetPromoDetailsTool, GetRevenueStatsTool, RegisterCustomerTool,
    StaffLoginTool, UpdateCustomerProfileTool, UpdateMenuItemTool, UpdateOrderStatusTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<BackendClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        // Menu
        .with_route(create_route::<GetMenuItemsTool, S>(client.clone()))
        .with_route(create_route::<GetMenuItemDetailsTool, S>(client.clone()))
        .with_route(create_route::<CreateMenuItemTool, S>(client.clone()))
        .with_route(create_route::<UpdateMenuItemTool, S>(client.clone()))
        // Orders
        .with_route(create_route::<CreateOrderTool, S>(client.clone()))
        .with_route(create_route::<GetOrderDetailsTool, S>(client.clone()))
        .with_route(create_route::<GetCustomerOrdersTool, S>(client.clone()))
        .with_route(create_route::<GetOrdersByStatusTool, S>(client.clone()))
        .with_route(create_route::<UpdateOrderStatusTool, S>(client.clone()))
        .with_route(create_route::<GetOrderJourneyTool, S>(client.clone()))
        .with_route(create_route::<GetFilteredOrdersTool, S>(client.clone()))
        // Customers
        .with_route(create_route::<RegisterCustomerTool, S>(client.clone()))
        .with_route(create_route::<GetCustomerProfileTool, S>(client.clone()))
        .with_route(create_route::<UpdateCustomerProfileTool, S>(client.clone()))
        .with_route(create_route::<CustomerLoginTool, S>(client.clone()))
        // Promos and reviews
        .with_route(create_route::<ApplyPromoCodeTool, S>(client.clone()))
        .with_route(create_route::<GetPromoDetailsTool, S>(client.clone()))
        .with_route(create_route::<GetOrderReviewsTool, S>(client.clone()))
        .with_route(create_route::<CreateReviewTool, S>(client.clone()))
        // Analytics
        .with_route(create_route::<GetDashboardStatsTool, S>(client.clone()))
        .with_route(create_route::<GetPopularItemsTool, S>(client.clone()))
        .with_route(create_route::<GetRevenueStatsTool, S>(client.clone()))
        // Staff and health
        .with_route(create_route::<StaffLoginTool, S>(client.clone()))
        .with_route(create_route::<CheckBackendHealthTool, S>(client))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::BackendConfig;

    struct TestServer {}

    fn test_client() -> Arc<BackendClient> {
        Arc::new(BackendClient::new(&BackendConfig::default()).unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 24);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_menu_items"));
        assert!(names.contains(&"create_order"));
        assert!(names.contains(&"get_filtered_orders"));
        assert!(names.contains(&"update_customer_profile"));
        assert!(names.contains(&"apply_promo_code"));
        assert!(names.contains(&"get_revenue_stats"));
        assert!(names.contains(&"staff_login"));
        assert!(names.contains(&"check_backend_health"));
    }

    #[test]
    fn test_every_tool_has_object_schema() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        for tool in router.list_all() {
            assert_eq!(
                tool.input_schema.get("type").and_then(|t| t.as_str()),
                Some("object"),
                "{} schema is not an object",
                tool.name
            );
        }
    }

    #[test]
    fn test_registry_matches_router() {
        let client = test_client();
        let registry = ToolRegistry::new(client.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(client);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
