use crate::{Config, Error, ToolRegistry, registry::ToolDefinition};
use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
    },
    service::{RequestContext, RoleServer},
};
use serde_json::Value;
use std::sync::Arc;

type McpResult<T = (), E = rmcp::ErrorData> = core::result::Result<T, E>;

/// Serves the tools of a [`ToolRegistry`] over MCP.
#[derive(Clone)]
pub struct Server {
    config: Arc<Config>,
    registry: Arc<ToolRegistry>,
}

impl Server {
    pub fn new(config: Config, registry: ToolRegistry) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    fn tools(&self) -> Vec<Tool> {
        self.registry.definitions().map(to_tool).collect()
    }
}

fn to_tool(definition: &ToolDefinition) -> Tool {
    let schema = definition.input_schema().to_json_schema();
    let input_schema = schema.as_object().cloned().unwrap_or_default();
    Tool::new(
        definition.name().to_string(),
        definition.description().to_string(),
        Arc::new(input_schema),
    )
}

impl ServerHandler for Server {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.name.clone(),
                version: self.config.version.clone(),
            },
            instructions: self.config.instructions.clone(),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> McpResult<ListToolsResult> {
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> McpResult<CallToolResult> {
        let arguments = Value::Object(request.arguments.unwrap_or_default());

        match self.registry.invoke(&request.name, &arguments).await {
            Ok(result) => Ok(result.into()),
            // handler failures are reported in-band so the client sees `is_error`
            Err(err @ Error::HandlerError { .. }) => {
                Ok(CallToolResult::error(vec![Content::text(err.to_string())]))
            }
            Err(err) => Err(err.into()),
        }
    }
}
