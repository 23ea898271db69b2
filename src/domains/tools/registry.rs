//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The list of available tools and their metadata
//! - Name-based dispatch for tool calls (used by the HTTP transport)

use std::sync::Arc;

use rmcp::model::Tool;
use serde_json::Value;
use tracing::warn;

use crate::core::backend::BackendClient;

use super::ToolError;
use super::definitions::common::{http_handler, to_tool};
use super::definitions::{
    ApplyPromoCodeTool, BackendTool, CheckBackendHealthTool, CreateMenuItemTool,
    CreateOrderTool, CreateReviewTool, CustomerLoginTool, GetCustomerOrdersTool,
    GetCustomerProfileTool, GetDashboardStatsTool, GetFilteredOrdersTool,
    GetMenuItemDetailsTool, GetMenuItemsTool, GetOrderDetailsTool, GetOrderJourneyTool,
    GetOrderReviewsTool, GetOrdersByStatusTool, GetPopularItemsTool, GetPromoDetailsTool,
    GetRevenueStatsTool, RegisterCustomerTool, StaffLoginTool, UpdateCustomerProfileTool,
    UpdateMenuItemTool, UpdateOrderStatusTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    client: Arc<BackendClient>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by `client`.
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetMenuItemsTool::NAME,
            GetMenuItemDetailsTool::NAME,
            CreateMenuItemTool::NAME,
            UpdateMenuItemTool::NAME,
            CreateOrderTool::NAME,
            GetOrderDetailsTool::NAME,
            GetCustomerOrdersTool::NAME,
            GetOrdersByStatusTool::NAME,
            UpdateOrderStatusTool::NAME,
            GetOrderJourneyTool::NAME,
            GetFilteredOrdersTool::NAME,
            RegisterCustomerTool::NAME,
            GetCustomerProfileTool::NAME,
            UpdateCustomerProfileTool::NAME,
            CustomerLoginTool::NAME,
            ApplyPromoCodeTool::NAME,
            GetPromoDetailsTool::NAME,
            GetOrderReviewsTool::NAME,
            CreateReviewTool::NAME,
            GetDashboardStatsTool::NAME,
            GetPopularItemsTool::NAME,
            GetRevenueStatsTool::NAME,
            StaffLoginTool::NAME,
            CheckBackendHealthTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            to_tool::<GetMenuItemsTool>(),
            to_tool::<GetMenuItemDetailsTool>(),
            to_tool::<CreateMenuItemTool>(),
            to_tool::<UpdateMenuItemTool>(),
            to_tool::<CreateOrderTool>(),
            to_tool::<GetOrderDetailsTool>(),
            to_tool::<GetCustomerOrdersTool>(),
            to_tool::<GetOrdersByStatusTool>(),
            to_tool::<UpdateOrderStatusTool>(),
            to_tool::<GetOrderJourneyTool>(),
            to_tool::<GetFilteredOrdersTool>(),
            to_tool::<RegisterCustomerTool>(),
            to_tool::<GetCustomerProfileTool>(),
            to_tool::<UpdateCustomerProfileTool>(),
            to_tool::<CustomerLoginTool>(),
            to_tool::<ApplyPromoCodeTool>(),
            to_tool::<GetPromoDetailsTool>(),
            to_tool::<GetOrderReviewsTool>(),
            to_tool::<CreateReviewTool>(),
            to_tool::<GetDashboardStatsTool>(),
            to_tool::<GetPopularItemsTool>(),
            to_tool::<GetRevenueStatsTool>(),
            to_tool::<StaffLoginTool>(),
            to_tool::<CheckBackendHealthTool>(),
        ]
    }

    /// Dispatch a tool call by name.
    ///
    /// Returns `{"content": [...], "isError": bool}`. Backend failures land in
    /// `isError`; only an unknown name or malformed arguments are `Err`.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        let client = self.client.as_ref();
        match name {
            GetMenuItemsTool::NAME => http_handler::<GetMenuItemsTool>(client, arguments).await,
            GetMenuItemDetailsTool::NAME => {
                http_handler::<GetMenuItemDetailsTool>(client, arguments).await
            }
            CreateMenuItemTool::NAME => http_handler::<CreateMenuItemTool>(client, arguments).await,
            UpdateMenuItemTool::NAME => http_handler::<UpdateMenuItemTool>(client, arguments).await,
            CreateOrderTool::NAME => http_handler::<CreateOrderTool>(client, arguments).await,
            GetOrderDetailsTool::NAME => {
                http_handler::<GetOrderDetailsTool>(client, arguments).await
            }
            GetCustomerOrdersTool::NAME => {
                http_handler::<GetCustomerOrdersTool>(client, arguments).await
            }
            GetOrdersByStatusTool::NAME => {
                http_handler::<GetOrdersByStatusTool>(client, arguments).await
            }
            UpdateOrderStatusTool::NAME => {
                http_handler::<UpdateOrderStatusTool>(client, arguments).await
            }
            GetOrderJourneyTool::NAME => {
                http_handler::<GetOrderJourneyTool>(client, arguments).await
            }
            GetFilteredOrdersTool::NAME => {
                http_handler::<GetFilteredOrdersTool>(client, arguments).await
            }
            RegisterCustomerTool::NAME => {
                http_handler::<RegisterCustomerTool>(client, arguments).await
            }
            GetCustomerProfileTool::NAME => {
                http_handler::<GetCustomerProfileTool>(client, arguments).await
            }
            UpdateCustomerProfileTool::NAME => {
                http_handler::<UpdateCustomerProfileTool>(client, arguments).await
            }
            CustomerLoginTool::NAME => http_handler::<CustomerLoginTool>(client, arguments).await,
            ApplyPromoCodeTool::NAME => http_handler::<ApplyPromoCodeTool>(client, arguments).await,
            GetPromoDetailsTool::NAME => {
                http_handler::<GetPromoDetailsTool>(client, arguments).await
            }
            GetOrderReviewsTool::NAME => {
                http_handler::<GetOrderReviewsTool>(client, arguments).await
            }
            CreateReviewTool::NAME => http_handler::<CreateReviewTool>(client, arguments).await,
            GetDashboardStatsTool::NAME => {
                http_handler::<GetDashboardStatsTool>(client, arguments).await
            }
            GetPopularItemsTool::NAME => {
                http_handler::<GetPopularItemsTool>(client, arguments).await
            }
            GetRevenueStatsTool::NAME => {
                http_handler::<GetRevenueStatsTool>(client, arguments).await
            }
            StaffLoginTool::NAME => http_handler::<StaffLoginTool>(client, arguments).await,
            CheckBackendHealthTool::NAME => {
                http_handler::<CheckBackendHealthTool>(client, arguments).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
