//! Staff authentication tool.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{BackendTool, create_json};
use crate::core::backend::{BackendClient, BackendResult};

/// Credentials for a staff login.
#[derive(Clone, Serialize, Deserialize, JsonSchema)]
pub struct StaffLoginParams {
    /// Staff email address.
    pub email: String,

    /// Account password.
    pub password: String,

    /// Account kind (staff, admin).
    #[serde(default = "default_user_type")]
    pub user_type: String,
}

fn default_user_type() -> String {
    "staff".to_string()
}

/// Authenticates a staff member.
pub struct StaffLoginTool;

#[async_trait]
impl BackendTool for StaffLoginTool {
    const NAME: &'static str = "staff_login";
    const DESCRIPTION: &'static str = "Authenticate a staff member.";
    type Params = StaffLoginParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        create_json(client, "/auth/staff/login", &params).await
    }
}
