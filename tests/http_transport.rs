//! End-to-end JSON-RPC over the HTTP transport, backed by a mock backend.

#![cfg(feature = "http")]

mod common;

use common::{MockBackend, MockReply};
use restaurant_mcp_server::core::transport::HttpConfig;
use restaurant_mcp_server::core::transport::http::{AppState, router};
use restaurant_mcp_server::core::{Config, McpServer};
use serde_json::{Value, json};
use tokio::net::TcpListener;

struct TestServer {
    url: String,
    http: reqwest::Client,
    _shutdown_tx: tokio::sync::oneshot::Sender<()>,
}

impl TestServer {
    async fn start(backend: &MockBackend) -> Self {
        let server = McpServer::with_client(Config::default(), backend.client());
        let app = router(AppState::new(server, &HttpConfig::default()), false);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        Self {
            url: format!("http://127.0.0.1:{}", port),
            http: reqwest::Client::new(),
            _shutdown_tx: shutdown_tx,
        }
    }

    async fn rpc(&self, method: &str, params: Value) -> Value {
        self.http
            .post(format!("{}/mcp", self.url))
            .json(&json!({"jsonrpc": "2.0", "id": 1, "method": method, "params": params}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn test_health_endpoint() {
    let backend = MockBackend::spawn(|_| MockReply::json(json!({}))).await;
    let server = TestServer::start(&backend).await;

    let body: Value = server
        .http
        .get(format!("{}/health", server.url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_initialize_then_list_tools() {
    let backend = MockBackend::spawn(|_| MockReply::json(json!({}))).await;
    let server = TestServer::start(&backend).await;

    let init = server.rpc("initialize", json!({})).await;
    assert_eq!(init["result"]["serverInfo"]["name"], "restaurant-backend-mcp");

    let tools = server.rpc("tools/list", json!({})).await;
    assert_eq!(tools["result"]["tools"].as_array().unwrap().len(), 24);
}

#[tokio::test]
async fn test_tool_call_reaches_backend() {
    let backend = MockBackend::spawn(|_| MockReply::json(json!([{"id": 1, "name": "Soup"}]))).await;
    let server = TestServer::start(&backend).await;

    let response = server
        .rpc(
            "tools/call",
            json!({"name": "get_menu_items", "arguments": {"category": "appetizer"}}),
        )
        .await;

    assert_eq!(response["result"]["isError"], false);
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("Soup"));
    assert_eq!(backend.only_request().query_param("category"), Some("appetizer"));
}

#[tokio::test]
async fn test_unknown_tool_is_invalid_params() {
    let backend = MockBackend::spawn(|_| MockReply::json(json!({}))).await;
    let server = TestServer::start(&backend).await;

    let response = server
        .rpc("tools/call", json!({"name": "delete_everything", "arguments": {}}))
        .await;

    assert_eq!(response["error"]["code"], -32602);
}

#[tokio::test]
async fn test_read_menu_resource() {
    let backend = MockBackend::spawn(|_| MockReply::json(json!([]))).await;
    let server = TestServer::start(&backend).await;

    let response = server
        .rpc("resources/read", json!({"uri": "menu://category/beverage"}))
        .await;

    let text = response["result"]["contents"][0]["text"].as_str().unwrap();
    assert_eq!(text, "# Restaurant Menu (Beverage)\n\n");
}

#[tokio::test]
async fn test_unknown_resource_code() {
    let backend = MockBackend::spawn(|_| MockReply::json(json!([]))).await;
    let server = TestServer::start(&backend).await;

    let response = server.rpc("resources/read", json!({"uri": "menu://nope"})).await;

    assert_eq!(response["error"]["code"], -32002);
}
