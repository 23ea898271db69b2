//! Order tools: placement, lookup, status journey and filtered search.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::common::{BackendTool, create_json, fetch_json, fetch_json_with};
use crate::core::backend::{BackendClient, BackendError, BackendResult};

// ============================================================================
// Tool Parameters
// ============================================================================

/// One line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OrderItem {
    /// Menu item being ordered.
    pub menu_item_id: i64,

    /// Number of portions.
    pub quantity: i64,

    /// Instructions for this item only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

/// Parameters for placing an order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateOrderParams {
    /// Customer ID placing the order.
    pub customer_id: i64,

    /// Type of order (dine_in, takeaway, delivery).
    pub order_type: String,

    /// Items to order.
    pub items: Vec<OrderItem>,

    /// Delivery address (required for delivery orders).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,

    /// Special instructions for the entire order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,

    /// Promo code to apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
}

/// Parameters identifying a single order.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct OrderIdParams {
    /// The ID of the order.
    pub order_id: i64,
}

/// Parameters selecting a customer's orders.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CustomerOrdersParams {
    /// The customer ID.
    pub customer_id: i64,
}

/// Parameters selecting orders by status.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct OrderStatusParams {
    /// Order status (pending, confirmed, preparing, ready, out_for_delivery, delivered, cancelled).
    pub status: String,
}

/// Parameters for recording a status change.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateOrderStatusParams {
    /// The ID of the order.
    pub order_id: i64,

    /// New status (pending, confirmed, preparing, ready, out_for_delivery, delivered, cancelled).
    pub status: String,

    /// ID of the staff member updating the status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<i64>,

    /// Additional notes for the status update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Parameters for the filtered order search.
///
/// Serializes directly as the `/orders/filter` query string.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FilterOrdersParams {
    /// Filter by order status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Filter by order type (dine_in, takeaway, delivery).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,

    /// Filter by customer ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,

    /// Orders after this date (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Orders before this date (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    /// Orders with amount >= this value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<f64>,

    /// Orders with amount <= this value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<f64>,

    /// Number of records to skip (pagination).
    #[serde(default)]
    pub skip: u32,

    /// Maximum number of records to return.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    100
}

impl Default for FilterOrdersParams {
    fn default() -> Self {
        Self {
            status: None,
            order_type: None,
            customer_id: None,
            start_date: None,
            end_date: None,
            min_amount: None,
            max_amount: None,
            skip: 0,
            limit: default_limit(),
        }
    }
}

// ============================================================================
// Filtered Lookup
// ============================================================================

/// Outcome of [`get_filtered_orders`].
#[derive(Debug)]
pub enum FilteredOrders {
    /// The backend answered, either the primary request or the retry.
    Found {
        /// Orders as returned (and possibly narrowed locally).
        orders: Value,
        /// Whether the status filter was applied here after a retry.
        locally_filtered: bool,
    },
    /// Every attempt failed; callers see an empty list.
    Degraded {
        /// The last failure.
        error: BackendError,
    },
}

impl FilteredOrders {
    /// Whether every attempt failed.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// The orders to hand back to the agent. Degraded lookups become `[]`.
    pub fn into_value(self) -> Value {
        match self {
            Self::Found { orders, .. } => orders,
            Self::Degraded { .. } => Value::Array(Vec::new()),
        }
    }
}

/// Search orders through `/orders/filter`.
///
/// Some backends reject the `status` filter. When the primary request fails
/// and a status was given, the request is retried once without it and the
/// result is narrowed here. No error ever escapes; see [`FilteredOrders`].
pub async fn get_filtered_orders(client: &BackendClient, params: &FilterOrdersParams) -> FilteredOrders {
    let error = match fetch_json_with(client, "/orders/filter", params).await {
        Ok(orders) => {
            return FilteredOrders::Found {
                orders,
                locally_filtered: false,
            };
        }
        Err(e) => e,
    };
    warn!("Failed to filter orders with {:?}: {}", params, error);

    let Some(status) = params.status.as_deref() else {
        return FilteredOrders::Degraded { error };
    };

    let retry = FilterOrdersParams {
        status: None,
        ..params.clone()
    };
    match fetch_json_with(client, "/orders/filter", &retry).await {
        Ok(orders) if status.is_empty() => FilteredOrders::Found {
            orders,
            locally_filtered: false,
        },
        Ok(orders) => {
            debug!("Retry without status succeeded; filtering on '{}' locally", status);
            FilteredOrders::Found {
                orders: retain_status(orders, status),
                locally_filtered: true,
            }
        }
        Err(e) => {
            warn!("Retry without status also failed: {}", e);
            FilteredOrders::Degraded { error: e }
        }
    }
}

/// Keep array entries whose `status` equals `status`. Non-array bodies pass
/// through unchanged.
fn retain_status(orders: Value, status: &str) -> Value {
    match orders {
        Value::Array(entries) => Value::Array(
            entries
                .into_iter()
                .filter(|order| order.get("status").and_then(Value::as_str) == Some(status))
                .collect(),
        ),
        other => other,
    }
}

// ============================================================================
// Tool Definitions
// ============================================================================

/// Places an order.
pub struct CreateOrderTool;

#[async_trait]
impl BackendTool for CreateOrderTool {
    const NAME: &'static str = "create_order";
    const DESCRIPTION: &'static str = "Create a new order for a customer. Each item needs menu_item_id and quantity, with optional special_instructions. Returns the created order with total amount and status.";
    type Params = CreateOrderParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        create_json(client, "/orders/", &params).await
    }
}

/// Fetches one order.
pub struct GetOrderDetailsTool;

#[async_trait]
impl BackendTool for GetOrderDetailsTool {
    const NAME: &'static str = "get_order_details";
    const DESCRIPTION: &'static str = "Get detailed information about a specific order.";
    type Params = OrderIdParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        fetch_json(client, &format!("/orders/{}", params.order_id)).await
    }
}

/// Lists a customer's orders.
pub struct GetCustomerOrdersTool;

#[async_trait]
impl BackendTool for GetCustomerOrdersTool {
    const NAME: &'static str = "get_customer_orders";
    const DESCRIPTION: &'static str = "Get all orders placed by a specific customer.";
    type Params = CustomerOrdersParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        fetch_json(client, &format!("/orders/customer/{}", params.customer_id)).await
    }
}

/// Lists orders in one status.
pub struct GetOrdersByStatusTool;

#[async_trait]
impl BackendTool for GetOrdersByStatusTool {
    const NAME: &'static str = "get_orders_by_status";
    const DESCRIPTION: &'static str = "Get all orders with a specific status (pending, confirmed, preparing, ready, out_for_delivery, delivered, cancelled).";
    type Params = OrderStatusParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        fetch_json(client, &format!("/orders/status/{}", params.status)).await
    }
}

/// Appends a status step to an order's journey.
pub struct UpdateOrderStatusTool;

#[async_trait]
impl BackendTool for UpdateOrderStatusTool {
    const NAME: &'static str = "update_order_status";
    const DESCRIPTION: &'static str = "Update the status of an order. This records a new step in the order journey.";
    type Params = UpdateOrderStatusParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        create_json(client, &format!("/orders/{}/journey", params.order_id), &params).await
    }
}

/// Fetches an order's status history.
pub struct GetOrderJourneyTool;

#[async_trait]
impl BackendTool for GetOrderJourneyTool {
    const NAME: &'static str = "get_order_journey";
    const DESCRIPTION: &'static str = "Get the complete history of an order's status changes, with timestamps and staff information.";
    type Params = OrderIdParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        fetch_json(client, &format!("/orders/{}/journey", params.order_id)).await
    }
}

/// Searches orders with optional filters.
pub struct GetFilteredOrdersTool;

#[async_trait]
impl BackendTool for GetFilteredOrdersTool {
    const NAME: &'static str = "get_filtered_orders";
    const DESCRIPTION: &'static str = "Get orders with advanced filtering: status, order type, customer, date range (YYYY-MM-DD), amount range, and skip/limit pagination. Returns an empty list when the backend cannot answer.";
    type Params = FilterOrdersParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        Ok(get_filtered_orders(client, &params).await.into_value())
    }
}
