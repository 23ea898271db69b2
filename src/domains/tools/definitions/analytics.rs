//! Dashboard and statistics tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{BackendTool, NoParams, fetch_json, fetch_json_with};
use crate::core::backend::{BackendClient, BackendResult};

/// Parameters for the popular items ranking.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PopularItemsParams {
    /// Number of items to return.
    #[serde(default = "default_popular_limit")]
    pub limit: u32,

    /// Look-back window in days.
    #[serde(default = "default_popular_days")]
    pub days: u32,
}

fn default_popular_limit() -> u32 {
    10
}

fn default_popular_days() -> u32 {
    1
}

/// Parameters for revenue statistics.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RevenueStatsParams {
    /// Range start (YYYY-MM-DD).
    pub start_date: String,

    /// Range end (YYYY-MM-DD).
    pub end_date: String,

    /// Bucket size (day, week, month).
    #[serde(default = "default_group_by")]
    pub group_by: String,
}

fn default_group_by() -> String {
    "day".to_string()
}

/// Fetches the dashboard summary.
pub struct GetDashboardStatsTool;

#[async_trait]
impl BackendTool for GetDashboardStatsTool {
    const NAME: &'static str = "get_dashboard_stats";
    const DESCRIPTION: &'static str = "Get overall dashboard statistics.";
    type Params = NoParams;

    async fn call(client: &BackendClient, _params: Self::Params) -> BackendResult<Value> {
        fetch_json(client, "/orders/stats/dashboard").await
    }
}

/// Ranks menu items by order frequency.
pub struct GetPopularItemsTool;

#[async_trait]
impl BackendTool for GetPopularItemsTool {
    const NAME: &'static str = "get_popular_items";
    const DESCRIPTION: &'static str = "Get popular menu items based on order frequency.";
    type Params = PopularItemsParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        fetch_json_with(client, "/orders/stats/popular-items", &params).await
    }
}

/// Aggregates revenue over a date range.
pub struct GetRevenueStatsTool;

#[async_trait]
impl BackendTool for GetRevenueStatsTool {
    const NAME: &'static str = "get_revenue_stats";
    const DESCRIPTION: &'static str = "Get revenue statistics for a date range, grouped by day, week or month.";
    type Params = RevenueStatsParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        fetch_json_with(client, "/orders/stats/revenue", &params).await
    }
}
