//! Menu tools: browse, inspect, create and update menu items.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{BackendTool, create_json, default_true, fetch_json, fetch_json_with, replace_json};
use crate::core::backend::{BackendClient, BackendResult};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for listing menu items.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetMenuItemsParams {
    /// Filter by category (appetizer, main_course, dessert, beverage, side).
    #[serde(default)]
    pub category: Option<String>,

    /// Filter by availability status.
    #[serde(default)]
    pub is_available: Option<bool>,
}

/// Query string sent to `/menu-items/`.
#[derive(Debug, Serialize)]
struct MenuQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_available: Option<bool>,
}

/// Parameters identifying a single menu item.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MenuItemIdParams {
    /// The ID of the menu item.
    pub item_id: i64,
}

/// Parameters for creating a menu item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateMenuItemParams {
    /// Menu item name.
    pub name: String,

    /// Item price.
    pub price: f64,

    /// Menu category (appetizer, main_course, dessert, beverage, side).
    pub category: String,

    /// Item description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Availability status.
    #[serde(default = "default_true")]
    pub is_available: bool,

    /// URL to item image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Preparation time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation_time: Option<i64>,
}

/// Fields of a menu item that an update may change. Unset fields are left
/// untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct MenuItemPatch {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// New category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New availability status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,

    /// New image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// New preparation time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation_time: Option<i64>,
}

/// Parameters for updating a menu item.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateMenuItemParams {
    /// The ID of the menu item to update.
    pub item_id: i64,

    #[serde(flatten)]
    pub changes: MenuItemPatch,
}

// ============================================================================
// Shared Request
// ============================================================================

/// GET `/menu-items/` with the given filters.
///
/// An empty category counts as no filter. Also used by the menu resources.
pub async fn list_menu_items(
    client: &BackendClient,
    category: Option<&str>,
    is_available: Option<bool>,
) -> BackendResult<Value> {
    let query = MenuQuery {
        category: category.filter(|c| !c.is_empty()),
        is_available,
    };
    fetch_json_with(client, "/menu-items/", &query).await
}

// ============================================================================
// Tool Definitions
// ============================================================================

/// Lists menu items, optionally filtered.
pub struct GetMenuItemsTool;

#[async_trait]
impl BackendTool for GetMenuItemsTool {
    const NAME: &'static str = "get_menu_items";
    const DESCRIPTION: &'static str = "Get menu items from the restaurant, optionally filtered by category and availability. Returns name, price, description and category for each item.";
    type Params = GetMenuItemsParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        list_menu_items(client, params.category.as_deref(), params.is_available).await
    }
}

/// Fetches one menu item.
pub struct GetMenuItemDetailsTool;

#[async_trait]
impl BackendTool for GetMenuItemDetailsTool {
    const NAME: &'static str = "get_menu_item_details";
    const DESCRIPTION: &'static str = "Get detailed information about a specific menu item, including price, description and preparation time.";
    type Params = MenuItemIdParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        fetch_json(client, &format!("/menu-items/{}", params.item_id)).await
    }
}

/// Creates a menu item (staff/admin only).
pub struct CreateMenuItemTool;

#[async_trait]
impl BackendTool for CreateMenuItemTool {
    const NAME: &'static str = "create_menu_item";
    const DESCRIPTION: &'static str = "Create a new menu item (staff/admin only).";
    type Params = CreateMenuItemParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        create_json(client, "/menu-items/", &params).await
    }
}

/// Updates a menu item (staff/admin only).
pub struct UpdateMenuItemTool;

#[async_trait]
impl BackendTool for UpdateMenuItemTool {
    const NAME: &'static str = "update_menu_item";
    const DESCRIPTION: &'static str = "Update an existing menu item (staff/admin only). Only the fields provided are changed.";
    type Params = UpdateMenuItemParams;

    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value> {
        replace_json(client, &format!("/menu-items/{}", params.item_id), &params.changes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_defaults_to_available() {
        let params: CreateMenuItemParams =
            serde_json::from_value(json!({"name": "Soup", "price": 4.5, "category": "appetizer"}))
                .unwrap();
        assert!(params.is_available);

        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(
            body,
            json!({"name": "Soup", "price": 4.5, "category": "appetizer", "is_available": true})
        );
    }

    #[test]
    fn test_update_sends_only_given_fields() {
        let params: UpdateMenuItemParams =
            serde_json::from_value(json!({"item_id": 3, "price": 9.0})).unwrap();
        assert_eq!(params.item_id, 3);
        assert_eq!(serde_json::to_value(&params.changes).unwrap(), json!({"price": 9.0}));
    }

    #[test]
    fn test_menu_query_omits_unset_filters() {
        let query = MenuQuery { category: None, is_available: Some(false) };
        assert_eq!(serde_urlencoded::to_string(&query).unwrap(), "is_available=false");
    }
}
