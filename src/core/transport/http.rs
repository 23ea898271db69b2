//! HTTP transport implementation.
//!
//! JSON-RPC 2.0 over POST, for clients that cannot spawn the server as a
//! child process. Tool calls go through the [`ToolRegistry`] so both
//! transports expose the same tools.
//!
//! [`ToolRegistry`]: crate::domains::tools::ToolRegistry

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::domains::resources::ResourceError;
use crate::domains::tools::ToolError;

/// MCP protocol revision announced by `initialize`.
const PROTOCOL_VERSION: &str = "2024-11-05";

const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;
const INTERNAL_ERROR: i32 = -32603;

/// JSON-RPC code MCP uses for unknown resources.
const RESOURCE_NOT_FOUND: i32 = -32002;

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }
}

impl From<ToolError> for JsonRpcError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound(_) | ToolError::InvalidArguments(_) => {
                Self::invalid_params(err.to_string())
            }
            ToolError::Backend(_) => Self::new(INTERNAL_ERROR, err.to_string()),
        }
    }
}

impl From<ResourceError> for JsonRpcError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound(_) => Self::new(RESOURCE_NOT_FOUND, err.to_string()),
            _ => Self::new(INTERNAL_ERROR, err.to_string()),
        }
    }
}

impl JsonRpcResponse {
    fn from_outcome(id: Option<Value>, outcome: Result<Value, JsonRpcError>) -> Self {
        let (result, error) = match outcome {
            Ok(result) => (Some(result), None),
            Err(error) => (None, Some(error)),
        };
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
            error,
        }
    }
}

/// Application state shared across HTTP handlers.
///
/// Requests are stateless: every POST is answered on its own and no
/// session is tracked between `initialize` and later calls.
#[derive(Clone)]
pub struct AppState {
    server: McpServer,
    rpc_path: String,
}

impl AppState {
    /// Create handler state for `server`.
    pub fn new(server: McpServer, config: &HttpConfig) -> Self {
        Self {
            server,
            rpc_path: config.rpc_path.clone(),
        }
    }
}

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Serve until the process is stopped.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = router(AppState::new(server, &self.config), self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - listening on {} (JSON-RPC at POST {}, CORS {})",
            addr,
            self.config.rpc_path,
            if self.config.enable_cors { "on" } else { "off" }
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))
    }
}

/// Build the axum router for `state`.
pub fn router(state: AppState, enable_cors: bool) -> Router {
    let rpc_path = state.rpc_path.clone();
    let app = Router::new()
        .route(&rpc_path, post(handle_rpc))
        .route("/health", get(health_check))
        .route("/", get(root_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    }
}

/// Describes the server and where to send requests.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "protocol": "JSON-RPC 2.0",
        "backend": state.server.client().base_url(),
        "endpoints": {
            "rpc": state.rpc_path,
            "health": "/health"
        }
    }))
}

/// Liveness of this server; the backend is not contacted.
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", request.method.as_str());
    info!("Received JSON-RPC request: {}", request.method);

    (StatusCode::OK, Json(process_request(&state, request).await))
}

/// Dispatch one JSON-RPC request.
async fn process_request(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let JsonRpcRequest {
        jsonrpc,
        id,
        method,
        params,
    } = request;

    if jsonrpc != "2.0" {
        let error = JsonRpcError::new(INVALID_REQUEST, "Invalid Request");
        return JsonRpcResponse::from_outcome(id, Err(error));
    }

    let server = &state.server;
    let outcome = match method.as_str() {
        "initialize" => Ok(initialize(server)),
        "tools/list" => Ok(json!({ "tools": server.list_tools() })),
        "tools/call" => call_tool(server, params.as_ref()).await,
        "resources/list" => Ok(json!({ "resources": server.list_resources().await })),
        "resources/templates/list" => {
            Ok(json!({ "resourceTemplates": server.list_resource_templates().await }))
        }
        "resources/read" => read_resource(server, params.as_ref()).await,
        "prompts/list" => Ok(json!({ "prompts": server.list_prompts().await })),
        "prompts/get" => get_prompt(server, params.as_ref()).await,
        m if m.starts_with("notifications/") => {
            info!("Received notification: {}", m);
            Ok(Value::Null)
        }
        other => {
            warn!("Unknown method: {}", other);
            Err(JsonRpcError::new(METHOD_NOT_FOUND, "Method not found"))
        }
    };

    JsonRpcResponse::from_outcome(id, outcome)
}

/// String parameter `key`, or an invalid-params error naming `what`.
fn required_str<'a>(
    params: Option<&'a Value>,
    key: &str,
    what: &str,
) -> Result<&'a str, JsonRpcError> {
    let params = params.ok_or_else(|| JsonRpcError::invalid_params("Missing params"))?;
    params
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| JsonRpcError::invalid_params(format!("Missing {}", what)))
}

fn initialize(server: &McpServer) -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {},
            "resources": {},
            "prompts": {}
        },
        "serverInfo": {
            "name": server.name(),
            "version": server.version()
        },
        "instructions": server.instructions()
    })
}

async fn call_tool(server: &McpServer, params: Option<&Value>) -> Result<Value, JsonRpcError> {
    let name = required_str(params, "name", "tool name")?;
    let arguments = params
        .and_then(|p| p.get("arguments"))
        .cloned()
        .unwrap_or_else(|| json!({}));

    Ok(server.call_tool(name, arguments).await?)
}

async fn read_resource(server: &McpServer, params: Option<&Value>) -> Result<Value, JsonRpcError> {
    let uri = required_str(params, "uri", "resource URI")?;
    Ok(server.read_resource(uri).await?)
}

async fn get_prompt(server: &McpServer, params: Option<&Value>) -> Result<Value, JsonRpcError> {
    let name = required_str(params, "name", "prompt name")?;
    let arguments = params.and_then(|p| p.get("arguments")).cloned();

    server
        .get_prompt(name, arguments)
        .await
        .map_err(|e| JsonRpcError::invalid_params(e.to_string()))
}
