//! Customer account tools.
//!
//! Parameter types holding a password do not implement `Debug`.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{BackendTool, create_json, fetch_json, replace_json};
use crate::core::backend::{BackendClient, BackendResult};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for registering a customer.
#[derive(Clone, Serialize, Deserialize, JsonSchema)]
pub struct RegisterCustomerParams {
    /// Customer email address.
    pub email: String,

    /// Customer first name.
    pub first_name: String,

    /// Customer last name.
    pub last_name: String,

    /// Account password (min 6 characters).
    pub password: String,

    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Delivery address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Parameters identifying a customer.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CustomerIdParams {
    /// The customer ID.
    pub customer_id: i64,
}

/// Profile fields an update may change.
#[derive(Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CustomerPatch {
    /// New first name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// New last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// New phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// New delivery address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// New password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Parameters for updating a customer profile.
#[derive(Clone, Deserialize, JsonSchema)]
pub struct UpdateCustomerParams {
    /// The customer ID.
    pub customer_id: i64,

    #[serde(flatten)]
    pub changes: CustomerPatch,
}

/// Credentials for a customer login.
#[derive(Clone, Serialize, Deserialize, JsonSchema)]
pub struct CustomerLoginParams {
    /// Customer email address.
    pub email: String,

    /// Account password.
    pub password: String,
}

// ============================================================================
// Tool Definitions
// ============================================================================

/// Creates a customer account.
pub struct RegisterCustomerTool;

#[async_trait]
impl BackendTool for RegisterCustomerTool {
    const NAME: &'static str = "register_customer";
    const DESCRIPTION: &'static str = "Register a new customer account. Returns the created customer profile.";
    type Params = RegisterCustomerParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        create_json(client, "/customers/", &params).await
    }
}

/// Fetches a customer profile.
pub struct GetCustomerProfileTool;

#[async_trait]
impl BackendTool for GetCustomerProfileTool {
    const NAME: &'static str = "get_customer_profile";
    const DESCRIPTION: &'static str = "Get customer profile information.";
    type Params = CustomerIdParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        fetch_json(client, &format!("/customers/{}", params.customer_id)).await
    }
}

/// Updates a customer profile.
pub struct UpdateCustomerProfileTool;

#[async_trait]
impl BackendTool for UpdateCustomerProfileTool {
    const NAME: &'static str = "update_customer_profile";
    const DESCRIPTION: &'static str = "Update customer profile information. Only the fields provided are changed.";
    type Params = UpdateCustomerParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        replace_json(client, &format!("/customers/{}", params.customer_id), &params.changes).await
    }
}

/// Authenticates a customer.
pub struct CustomerLoginTool;

#[async_trait]
impl BackendTool for CustomerLoginTool {
    const NAME: &'static str = "customer_login";
    const DESCRIPTION: &'static str = "Authenticate a customer and get their profile.";
    type Params = CustomerLoginParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        create_json(client, "/auth/login", &params).await
    }
}
