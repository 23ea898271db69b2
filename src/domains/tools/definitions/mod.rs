//! Tool definitions, one file per backend area.
//!
//! Every tool implements [`BackendTool`]; see `common.rs` for the plumbing
//! shared by all of them.

pub mod analytics;
pub mod common;
pub mod customers;
pub mod health;
pub mod menu;
pub mod orders;
pub mod promos;
pub mod reviews;
pub mod staff;

pub use analytics::{GetDashboardStatsTool, GetPopularItemsTool, GetRevenueStatsTool};
pub use common::BackendTool;
pub use customers::{
    CustomerLoginTool, CustomerPatch, GetCustomerProfileTool, RegisterCustomerTool,
    UpdateCustomerProfileTool,
};
pub use health::CheckBackendHealthTool;
pub use menu::{
    CreateMenuItemTool, GetMenuItemDetailsTool, GetMenuItemsTool, MenuItemPatch,
    UpdateMenuItemTool, list_menu_items,
};
pub use orders::{
    CreateOrderTool, FilterOrdersParams, FilteredOrders, GetCustomerOrdersTool,
    GetFilteredOrdersTool, GetOrderDetailsTool, GetOrderJourneyTool, GetOrdersByStatusTool,
    OrderItem, UpdateOrderStatusTool, get_filtered_orders,
};
pub use promos::{ApplyPromoCodeTool, GetPromoDetailsTool};
pub use reviews::{CreateReviewTool, GetOrderReviewsTool};
pub use staff::StaffLoginTool;
