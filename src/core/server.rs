//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services. One
//! [`BackendClient`] is built from the configuration and shared by the tool
//! router, the tool registry and the resource service.
//!
//! The ToolRouter is built in `domains/tools/router.rs`; adding a tool does
//! not require modifying this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

use super::backend::BackendClient;
use super::config::Config;
use crate::domains::{
    prompts::{PromptError, PromptService},
    resources::{ResourceError, ResourceService},
    tools::{ToolError, ToolRegistry, build_tool_router},
};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between different domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Client for the restaurant backend.
    client: Arc<BackendClient>,

    /// Name-based tool dispatch (HTTP transport).
    tool_registry: Arc<ToolRegistry>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if the backend client cannot be built (bad base URL or API key).
    pub fn new(config: Config) -> super::error::Result<Self> {
        let client = Arc::new(BackendClient::new(&config.backend)?);
        Ok(Self::with_client(config, client))
    }

    /// Create a new MCP server around an existing backend client.
    pub fn with_client(config: Config, client: Arc<BackendClient>) -> Self {
        info!("Backend: {}", client.base_url());

        Self {
            config: Arc::new(config),
            tool_registry: Arc::new(ToolRegistry::new(client.clone())),
            resource_service: Arc::new(ResourceService::new(client.clone())),
            prompt_service: Arc::new(PromptService::new()),
            tool_router: build_tool_router::<Self>(client.clone()),
            client,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the shared backend client.
    pub fn client(&self) -> &Arc<BackendClient> {
        &self.client
    }

    /// Instructions sent to clients on initialization.
    pub fn instructions(&self) -> String {
        format!(
            "Restaurant backend MCP server ({} environment). Tools browse and manage the menu, \
             orders, customers, promo codes, reviews and statistics of the backend at {}. \
             Resources menu://all and menu://category/{{category}} give the menu as text; \
             prompts guide ordering and order tracking.",
            self.config.environment,
            self.client.base_url()
        )
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(&self, name: &str, arguments: Value) -> std::result::Result<Value, ToolError> {
        self.tool_registry.call_tool(name, arguments).await
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(&self, uri: &str) -> std::result::Result<Value, ResourceError> {
        let result = self.resource_service.read_resource(uri).await?;
        Ok(serde_json::json!({
            "contents": result.contents
        }))
    }

    /// List all available resource templates (for HTTP transport).
    pub async fn list_resource_templates(&self) -> Vec<Value> {
        let templates = self.resource_service.list_resource_templates().await;

        templates
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "uriTemplate": t.raw.uri_template,
                    "name": t.raw.name,
                    "title": t.raw.title,
                    "description": t.raw.description,
                    "mimeType": t.raw.mime_type
                })
            })
            .collect()
    }

    /// List all available prompts (for HTTP transport).
    pub async fn list_prompts(&self) -> Vec<Value> {
        let prompts = self.prompt_service.list_prompts().await;

        prompts
            .into_iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "description": p.description,
                    "arguments": p.arguments
                })
            })
            .collect()
    }

    /// Get a prompt by name (for HTTP transport).
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<Value>,
    ) -> std::result::Result<Value, PromptError> {
        let args = match arguments {
            Some(Value::Object(map)) => Some(prompt_arguments(map)),
            _ => None,
        };

        let result = self.prompt_service.get_prompt(name, args).await?;
        Ok(serde_json::json!({
            "description": result.description,
            "messages": result.messages
        }))
    }
}

/// Flatten prompt arguments to strings. Numbers and booleans keep their JSON
/// text so `{"order_id": 42}` works like `{"order_id": "42"}`; nulls are
/// treated as absent.
fn prompt_arguments(map: serde_json::Map<String, Value>) -> HashMap<String, String> {
    map.into_iter()
        .filter_map(|(k, v)| match v {
            Value::String(s) => Some((k, s)),
            Value::Null => None,
            other => Some((k, other.to_string())),
        })
        .collect()
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(self.instructions()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| match e {
                ResourceError::NotFound(_) => McpError::resource_not_found(e.to_string(), None),
                _ => McpError::internal_error(e.to_string(), None),
            })
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        let arguments = request.arguments.map(prompt_arguments);
        self.prompt_service
            .get_prompt(&request.name, arguments)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}
