//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use std::sync::Arc;

use crate::tools::{SearchVideosParams, search_videos_impl};

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};
use vidcat_core::{AppConfig, FreshnessCache};

/// The main MCP server handler for vidcat.
#[derive(Clone)]
pub struct VideoCatalogServer {
    tool_router: ToolRouter<Self>,
    catalog: Arc<FreshnessCache>,
    config: Arc<AppConfig>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl VideoCatalogServer {
    /// Create a new server handler over a shared catalog cache.
    pub fn new(catalog: Arc<FreshnessCache>, config: AppConfig) -> Self {
        Self { tool_router: Self::tool_router(), catalog, config: Arc::new(config) }
    }

    /// Search the video catalog.
    ///
    /// The catalog is reloaded from the sheet when the cached copy has expired.
    #[tool(
        description = "Search the OU Sooners video catalog. Returns up to a few videos whose title or description contains the query, as {\"videos\": [{title, description, url}]}."
    )]
    async fn search_videos(&self, params: Parameters<SearchVideosParams>) -> Result<CallToolResult, McpError> {
        search_videos_impl(&self.catalog, &self.config, params.0).await
    }
}

impl ServerHandler for VideoCatalogServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "vidcat-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
