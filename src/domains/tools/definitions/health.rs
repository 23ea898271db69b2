//! Backend health probe.

use async_trait::async_trait;
use serde_json::{Value, json};

use super::common::{BackendTool, NoParams, fetch_json};
use crate::core::backend::{BackendClient, BackendResult};

/// Checks that the backend answers on `/health`.
pub struct CheckBackendHealthTool;

#[async_trait]
impl BackendTool for CheckBackendHealthTool {
    const NAME: &'static str = "check_backend_health";
    const DESCRIPTION: &'static str = "Check if the restaurant backend API is healthy and reachable.";
    type Params = NoParams;

    async fn call(client: &BackendClient, _params: Self::Params) -> BackendResult<Value> {
        let response = fetch_json(client, "/health").await?;
        Ok(json!({ "status": "healthy", "response": response }))
    }
}
