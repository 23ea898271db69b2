//! Resource service implementation.
//!
//! The ResourceService lists the registered resources and templates and reads
//! them by URI. Menu content is fetched from the backend on every read.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use serde_json::Value;
use tracing::{info, instrument};

use super::definitions::{MenuScope, render_menu};
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources, resolve_template};
use crate::core::backend::BackendClient;
use crate::domains::tools::definitions::list_menu_items;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Client used to fetch backend data.
    client: Arc<BackendClient>,

    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: HashMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Menu document rendered from backend data.
    Menu(MenuScope),
}

impl ResourceService {
    /// Create a new ResourceService reading through `client`.
    pub fn new(client: Arc<BackendClient>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            client,
            resources: HashMap::new(),
            templates: get_all_resource_templates(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    #[instrument(skip(self))]
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let content = match self.resources.get(uri) {
            Some(entry) => entry.content.clone(),
            None => resolve_template(uri).ok_or_else(|| ResourceError::not_found(uri))?,
        };

        let text = match content {
            ResourceContent::Menu(scope) => self.menu_text(&scope).await?,
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: Some("text/markdown".to_string()),
                text,
                meta: None,
            }],
        })
    }

    /// Fetch and render the menu for `scope`.
    async fn menu_text(&self, scope: &MenuScope) -> Result<String, ResourceError> {
        let items = list_menu_items(&self.client, scope.category(), None).await?;
        match items {
            Value::Array(items) => Ok(render_menu(scope.label(), &items)),
            other => Err(ResourceError::internal(format!(
                "expected a list of menu items, got {}",
                other
            ))),
        }
    }
}
