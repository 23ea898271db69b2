//! Tool dispatch tests: each call goes through the registry to a mock
//! backend, and the recorded request is checked against what the tool
//! should have sent.

mod common;

use axum::http::Method;
use common::{MockBackend, MockReply, tool_output};
use restaurant_mcp_server::domains::tools::ToolRegistry;
use restaurant_mcp_server::domains::tools::definitions::{
    FilterOrdersParams, FilteredOrders, get_filtered_orders,
};
use serde_json::{Value, json};

fn registry(backend: &MockBackend) -> ToolRegistry {
    ToolRegistry::new(backend.client())
}

async fn call(backend: &MockBackend, name: &str, arguments: Value) -> (Value, bool) {
    let result = registry(backend).call_tool(name, arguments).await.unwrap();
    tool_output(&result)
}

// ============================================================================
// Menu
// ============================================================================

#[tokio::test]
async fn test_menu_items_by_category() {
    let backend = MockBackend::spawn(|_| MockReply::json(json!([]))).await;

    let (payload, is_error) = call(&backend, "get_menu_items", json!({"category": "dessert"})).await;

    assert!(!is_error);
    assert_eq!(payload, json!([]));
    let request = backend.only_request();
    assert_eq!(request.path, "/menu-items/");
    assert_eq!(request.query, vec![("category".to_string(), "dessert".to_string())]);
}

#[tokio::test]
async fn test_empty_category_sends_no_query() {
    let backend = MockBackend::spawn(|_| MockReply::json(json!([]))).await;

    call(&backend, "get_menu_items", json!({"category": ""})).await;

    assert!(backend.only_request().query.is_empty());
}

#[tokio::test]
async fn test_update_menu_item_sends_only_changes() {
    let backend = MockBackend::spawn(|_| MockReply::json(json!({"id": 3}))).await;

    call(
        &backend,
        "update_menu_item",
        json!({"item_id": 3, "price": 9.5, "is_available": false}),
    )
    .await;

    let request = backend.only_request();
    assert_eq!(request.method, Method::PUT);
    assert_eq!(request.path, "/menu-items/3");
    assert_eq!(request.body, Some(json!({"price": 9.5, "is_available": false})));
}

// ============================================================================
// Customers and promos
// ============================================================================

#[tokio::test]
async fn test_update_customer_profile_phone_only() {
    let backend = MockBackend::spawn(|_| MockReply::json(json!({"id": 7, "phone": "555-1111"}))).await;

    let (payload, is_error) = call(
        &backend,
        "update_customer_profile",
        json!({"customer_id": 7, "phone": "555-1111"}),
    )
    .await;

    assert!(!is_error);
    assert_eq!(payload["phone"], "555-1111");
    let request = backend.only_request();
    assert_eq!(request.method, Method::PUT);
    assert_eq!(request.path, "/customers/7");
    assert_eq!(request.body, Some(json!({"phone": "555-1111"})));
}

#[tokio::test]
async fn test_apply_promo_code_passes_response_through() {
    let answer = json!({"valid": true, "discount_amount": 10.0, "final_total": 90.0});
    let reply = answer.clone();
    let backend = MockBackend::spawn(move |_| MockReply::json(reply.clone())).await;

    let (payload, is_error) = call(
        &backend,
        "apply_promo_code",
        json!({"promo_code": "SAVE10", "order_amount": 100.0}),
    )
    .await;

    assert!(!is_error);
    assert_eq!(payload, answer);
    let request = backend.only_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/promos/apply");
    assert_eq!(request.body, Some(json!({"promo_code": "SAVE10", "order_amount": 100.0})));
}

#[tokio::test]
async fn test_customer_login_posts_credentials() {
    let backend = MockBackend::spawn(|_| MockReply::json(json!({"id": 1}))).await;

    call(
        &backend,
        "customer_login",
        json!({"email": "ada@example.com", "password": "secret1"}),
    )
    .await;

    let request = backend.only_request();
    assert_eq!(request.path, "/auth/login");
    assert_eq!(
        request.body,
        Some(json!({"email": "ada@example.com", "password": "secret1"}))
    );
}

// ============================================================================
// Orders
// ============================================================================

#[tokio::test]
async fn test_create_order_omits_unset_fields() {
    let backend = MockBackend::spawn(|_| MockReply::json(json!({"id": 55, "status": "pending"}))).await;

    call(
        &backend,
        "create_order",
        json!({
            "customer_id": 4,
            "order_type": "takeaway",
            "items": [{"menu_item_id": 2, "quantity": 3}]
        }),
    )
    .await;

    let request = backend.only_request();
    assert_eq!(request.path, "/orders/");
    assert_eq!(
        request.body,
        Some(json!({
            "customer_id": 4,
            "order_type": "takeaway",
            "items": [{"menu_item_id": 2, "quantity": 3}]
        }))
    );
}

#[tokio::test]
async fn test_update_order_status_appends_journey_step() {
    let backend = MockBackend::spawn(|_| MockReply::json(json!({"id": 1}))).await;

    call(
        &backend,
        "update_order_status",
        json!({"order_id": 12, "status": "ready", "staff_id": 3}),
    )
    .await;

    let request = backend.only_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/orders/12/journey");
    assert_eq!(
        request.body,
        Some(json!({"order_id": 12, "status": "ready", "staff_id": 3}))
    );
}

#[tokio::test]
async fn test_missing_order_is_error_result() {
    let backend =
        MockBackend::spawn(|_| MockReply::status(404, json!({"detail": "Order not found"}))).await;

    let result = registry(&backend)
        .call_tool("get_order_details", json!({"order_id": 999}))
        .await
        .unwrap();

    assert_eq!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("404"));
    assert!(text.contains("Order not found"));
}

#[tokio::test]
async fn test_filtered_orders_primary_success_has_no_retry() {
    let orders = json!([{"id": 1, "status": "pending"}]);
    let reply = orders.clone();
    let backend = MockBackend::spawn(move |_| MockReply::json(reply.clone())).await;

    let (payload, is_error) = call(&backend, "get_filtered_orders", json!({"status": "pending"})).await;

    assert!(!is_error);
    assert_eq!(payload, orders);
    let request = backend.only_request();
    assert_eq!(request.path, "/orders/filter");
    assert_eq!(request.query_param("status"), Some("pending"));
    assert_eq!(request.query_param("skip"), Some("0"));
    assert_eq!(request.query_param("limit"), Some("100"));
}

#[tokio::test]
async fn test_filtered_orders_retry_filters_locally() {
    let backend = MockBackend::spawn(|r| {
        if r.query_param("status").is_some() {
            MockReply::status(422, json!({"detail": "status not supported"}))
        } else {
            MockReply::json(json!([
                {"id": 1, "status": "pending"},
                {"id": 2, "status": "delivered"},
                {"id": 3, "status": "pending"}
            ]))
        }
    })
    .await;

    let (payload, is_error) = call(&backend, "get_filtered_orders", json!({"status": "pending"})).await;

    assert!(!is_error);
    assert_eq!(
        payload,
        json!([{"id": 1, "status": "pending"}, {"id": 3, "status": "pending"}])
    );
    let requests = backend.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].query_param("status"), None);
}

#[tokio::test]
async fn test_filtered_orders_both_attempts_fail() {
    let backend = MockBackend::spawn(|_| MockReply::text(500, "boom")).await;

    let (payload, is_error) = call(&backend, "get_filtered_orders", json!({"status": "pending"})).await;

    assert!(!is_error);
    assert_eq!(payload, json!([]));
    assert_eq!(backend.requests().len(), 2);
}

#[tokio::test]
async fn test_filtered_orders_without_status_does_not_retry() {
    let backend = MockBackend::spawn(|_| MockReply::text(500, "boom")).await;
    let client = backend.client();

    let params = FilterOrdersParams {
        customer_id: Some(4),
        ..Default::default()
    };
    let outcome = get_filtered_orders(&client, &params).await;

    assert!(outcome.is_degraded());
    assert_eq!(backend.requests().len(), 1);
}

#[tokio::test]
async fn test_filtered_orders_reports_local_filtering() {
    let backend = MockBackend::spawn(|r| {
        if r.query_param("status").is_some() {
            MockReply::text(400, "bad filter")
        } else {
            MockReply::json(json!([{"id": 9, "status": "ready"}]))
        }
    })
    .await;
    let client = backend.client();

    let params = FilterOrdersParams {
        status: Some("ready".to_string()),
        ..Default::default()
    };

    match get_filtered_orders(&client, &params).await {
        FilteredOrders::Found {
            orders,
            locally_filtered,
        } => {
            assert!(locally_filtered);
            assert_eq!(orders, json!([{"id": 9, "status": "ready"}]));
        }
        other => panic!("expected orders, got {:?}", other),
    }
}

#[tokio::test]
async fn test_filtered_orders_empty_status_keeps_retry_results() {
    let backend = MockBackend::spawn(|r| {
        if r.query_param("status").is_some() {
            MockReply::text(400, "bad filter")
        } else {
            MockReply::json(json!([{"id": 5, "status": "pending"}]))
        }
    })
    .await;
    let client = backend.client();

    let params = FilterOrdersParams {
        status: Some(String::new()),
        ..Default::default()
    };

    match get_filtered_orders(&client, &params).await {
        FilteredOrders::Found {
            orders,
            locally_filtered,
        } => {
            assert!(!locally_filtered);
            assert_eq!(orders, json!([{"id": 5, "status": "pending"}]));
        }
        other => panic!("expected orders, got {:?}", other),
    }
    assert_eq!(backend.requests().len(), 2);
}

// ============================================================================
// Analytics and health
// ============================================================================

#[tokio::test]
async fn test_popular_items_default_query() {
    let backend = MockBackend::spawn(|_| MockReply::json(json!([]))).await;

    call(&backend, "get_popular_items", json!({})).await;

    let request = backend.only_request();
    assert_eq!(request.path, "/orders/stats/popular-items");
    assert_eq!(request.query_param("limit"), Some("10"));
    assert_eq!(request.query_param("days"), Some("1"));
}

#[tokio::test]
async fn test_health_wraps_backend_answer() {
    let backend = MockBackend::spawn(|_| MockReply::json(json!({"status": "ok"}))).await;

    let (payload, is_error) = call(&backend, "check_backend_health", json!({})).await;

    assert!(!is_error);
    assert_eq!(payload, json!({"status": "healthy", "response": {"status": "ok"}}));
    assert_eq!(backend.only_request().path, "/health");
}

#[tokio::test]
async fn test_invalid_arguments_never_reach_backend() {
    let backend = MockBackend::spawn(|_| MockReply::json(json!({}))).await;

    let result = registry(&backend)
        .call_tool("get_order_details", json!({"order_id": "abc"}))
        .await;

    assert!(result.is_err());
    assert!(backend.requests().is_empty());
}
