//! MCP server exposing component search over stdio.

use crate::state::CatalogState;
use crate::tools::inspect_component::{InspectComponentRequest, handle_inspect_component};
use crate::tools::list_components::{ListComponentsRequest, handle_list_components};
use crate::tools::search::{SearchRequest, handle_search};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP Server for component documentation search
#[derive(Clone)]
pub struct ComponentServer {
    /// Loaded catalog and request defaults
    state: CatalogState,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for ComponentServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentServer")
            .field("components", &self.state.catalog().len())
            .field("default_limit", &self.state.default_limit())
            .finish()
    }
}

#[tool_router]
impl ComponentServer {
    pub fn new(state: CatalogState) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    #[tool(
        description = "Search the component catalog. Matches the query against component keys, titles and keywords, ranking exact and prefix matches first. Multi-word queries also match components where every word hits some field. An empty query lists everything.",
        input_schema = inline_schema_for_type::<SearchRequest>()
    )]
    async fn search_components(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(&self.state, request)
    }

    #[tool(
        description = "List catalog components grouped by category. Optionally restrict to one category.",
        input_schema = inline_schema_for_type::<ListComponentsRequest>()
    )]
    async fn list_components(
        &self,
        Parameters(request): Parameters<ListComponentsRequest>,
    ) -> std::result::Result<String, String> {
        handle_list_components(&self.state, request)
    }

    #[tool(
        description = "Show one component by key: title, category and search keywords. Suggests close keys when the key is unknown.",
        input_schema = inline_schema_for_type::<InspectComponentRequest>()
    )]
    async fn inspect_component(
        &self,
        Parameters(request): Parameters<InspectComponentRequest>,
    ) -> std::result::Result<String, String> {
        handle_inspect_component(&self.state, request)
    }
}

#[tool_handler]
impl ServerHandler for ComponentServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "componentdoc-mcp: search the design-system component catalog. \
                 Use search_components for free-text lookups, list_components to browse \
                 by category and inspect_component for a single component.",
            )
    }
}

/// Generate an inline JSON schema for MCP tools
///
/// Unlike rmcp's default `schema_for_type()`, this function sets `inline_subschemas = true`
/// so optional fields render as plain inputs in MCP Inspector instead of `$ref`s.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();

    match serde_json::to_value(schema) {
        Ok(serde_json::Value::Object(object)) => Arc::new(object),
        other => {
            tracing::error!("Schema serialization produced non-object value: {:?}", other);
            Arc::new(JsonObject::new())
        }
    }
}
