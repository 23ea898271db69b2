//! Promo code tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{BackendTool, create_json, fetch_json};
use crate::core::backend::{BackendClient, BackendResult};

/// Parameters for applying a promo code.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ApplyPromoParams {
    /// The promo code to apply.
    pub promo_code: String,

    /// Order amount the discount is computed on.
    pub order_amount: f64,
}

/// Parameters identifying a promo.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PromoIdParams {
    /// The promo ID.
    pub promo_id: i64,
}

/// Validates a promo code against an order amount.
pub struct ApplyPromoCodeTool;

#[async_trait]
impl BackendTool for ApplyPromoCodeTool {
    const NAME: &'static str = "apply_promo_code";
    const DESCRIPTION: &'static str = "Validate and apply a promo code to calculate the discount for an order amount.";
    type Params = ApplyPromoParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        create_json(client, "/promos/apply", &params).await
    }
}

/// Fetches a promo.
pub struct GetPromoDetailsTool;

#[async_trait]
impl BackendTool for GetPromoDetailsTool {
    const NAME: &'static str = "get_promo_details";
    const DESCRIPTION: &'static str = "Get details about a specific promo code.";
    type Params = PromoIdParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        fetch_json(client, &format!("/promos/{}", params.promo_id)).await
    }
}
