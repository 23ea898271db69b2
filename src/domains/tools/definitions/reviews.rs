//! Review tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{BackendTool, create_json, fetch_json};
use super::orders::OrderIdParams;
use crate::core::backend::{BackendClient, BackendResult};

/// Parameters for writing a review.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateReviewParams {
    /// Customer writing the review.
    pub customer_id: i64,

    /// Rating given.
    pub rating: i64,

    /// Free-text comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Order being reviewed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    /// Menu item being reviewed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_item_id: Option<i64>,
}

/// Lists the reviews of an order.
pub struct GetOrderReviewsTool;

#[async_trait]
impl BackendTool for GetOrderReviewsTool {
    const NAME: &'static str = "get_order_reviews";
    const DESCRIPTION: &'static str = "Get reviews for a specific order.";
    type Params = OrderIdParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        fetch_json(client, &format!("/reviews/{}", params.order_id)).await
    }
}

/// Writes a review.
pub struct CreateReviewTool;

#[async_trait]
impl BackendTool for CreateReviewTool {
    const NAME: &'static str = "create_review";
    const DESCRIPTION: &'static str = "Create a review for an order or menu item.";
    type Params = CreateReviewParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        create_json(client, "/reviews/", &params).await
    }
}
