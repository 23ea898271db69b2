//! Shared plumbing for backend-backed tools.
//!
//! Every tool is a unit struct implementing [`BackendTool`]: a name, a
//! description, a parameter type (whose JSON Schema becomes the tool's input
//! schema) and one async `call` against the [`BackendClient`]. The helpers in
//! this module turn any such type into an rmcp route, an HTTP dispatch target
//! or a `Tool` listing entry, so individual tool files contain only the
//! request mapping.

use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::core::backend::{BackendClient, BackendResult};
use crate::domains::tools::ToolError;

/// A tool that maps its parameters onto one backend request.
#[async_trait]
pub trait BackendTool: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Arguments accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Perform the backend call and return its decoded JSON.
    async fn call(client: &BackendClient, params: Self::Params) -> BackendResult<Value>;
}

/// Parameters for tools that take no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Build the `Tool` listing entry for `T`.
pub fn to_tool<T: BackendTool>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Deserialize call arguments into `T::Params`.
pub fn parse_params<T: BackendTool>(arguments: JsonObject) -> Result<T::Params, ToolError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", T::NAME, e)))
}

/// Run `T` and wrap the outcome as a `CallToolResult`.
///
/// Backend failures become error results (`isError: true`) carrying the
/// status and body; they are not protocol errors.
#[instrument(skip_all, fields(tool = T::NAME))]
pub async fn execute<T: BackendTool>(client: &BackendClient, params: T::Params) -> CallToolResult {
    info!("Tool called");
    match T::call(client, params).await {
        Ok(value) => json_result(&value),
        Err(e) => error_result(&ToolError::from(e).to_string()),
    }
}

/// Create the rmcp route for `T` (STDIO transport).
pub fn create_route<T, S>(client: Arc<BackendClient>) -> ToolRoute<S>
where
    T: BackendTool,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool::<T>(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let client = client.clone();
        async move {
            let params = parse_params::<T>(args)
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
            Ok(execute::<T>(&client, params).await)
        }
        .boxed()
    })
}

/// Run `T` from raw JSON arguments (HTTP transport).
pub async fn http_handler<T: BackendTool>(
    client: &BackendClient,
    arguments: Value,
) -> Result<Value, ToolError> {
    let args = match arguments {
        Value::Object(map) => map,
        Value::Null => JsonObject::new(),
        other => {
            return Err(ToolError::invalid_arguments(format!(
                "{}: arguments must be an object, got {}",
                T::NAME,
                other
            )));
        }
    };

    let params = parse_params::<T>(args)?;
    let result = execute::<T>(client, params).await;

    Ok(serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    }))
}

/// Create a success result carrying pretty-printed JSON.
pub fn json_result(value: &Value) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_result(&format!("Failed to encode backend response: {}", e)),
    }
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// GET `path` and decode the JSON body.
pub async fn fetch_json(client: &BackendClient, path: &str) -> BackendResult<Value> {
    let response = client.fetch::<()>(path, None).await?;
    BackendClient::decode(response).await
}

/// GET `path` with `query` and decode the JSON body.
pub async fn fetch_json_with<Q>(client: &BackendClient, path: &str, query: &Q) -> BackendResult<Value>
where
    Q: Serialize + Sync + ?Sized,
{
    let response = client.fetch(path, Some(query)).await?;
    BackendClient::decode(response).await
}

/// POST `body` to `path` and decode the JSON body.
pub async fn create_json<B>(client: &BackendClient, path: &str, body: &B) -> BackendResult<Value>
where
    B: Serialize + Sync + ?Sized,
{
    let response = client.create(path, Some(body)).await?;
    BackendClient::decode(response).await
}

/// PUT `body` to `path` and decode the JSON body.
pub async fn replace_json<B>(client: &BackendClient, path: &str, body: &B) -> BackendResult<Value>
where
    B: Serialize + Sync + ?Sized,
{
    let response = client.replace(path, Some(body)).await?;
    BackendClient::decode(response).await
}

/// Serde default for flags that are on unless stated otherwise.
pub fn default_true() -> bool {
    true
}
