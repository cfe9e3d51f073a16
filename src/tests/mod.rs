//! End-to-end tests driving the server through an MCP client.


use crate::{Config, FixedClock, Server, ToolRegistry, ToolResult, ValidatedInput};
use chrono::{TimeZone, Utc};
use rmcp::{
    RoleClient, ServiceError, ServiceExt,
    model::{CallToolRequestParam, CallToolResult, ErrorData, ListToolsResult, ServerInfo},
    service::RunningService,
};
use serde_json::Value;
use std::{io, sync::Arc};

/// The date every test server reports as "today".
pub const TEST_DATE: &str = "2023-01-01";

/// Manages communication with an MCP server
pub struct Test {
    /// The client side of the connection
    client: RunningService<RoleClient, ()>,
}

impl Test {
    /// Serve the default tools with a clock frozen at [`TEST_DATE`]
    pub async fn start() -> io::Result<Self> {
        let clock = FixedClock(Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap());
        let mut registry = ToolRegistry::new();
        crate::tools::register_all(&mut registry, Arc::new(clock)).map_err(io::Error::other)?;
        Self::with_registry(registry).await
    }

    /// Serve an arbitrary registry over a duplex connection
    pub async fn with_registry(registry: ToolRegistry) -> io::Result<Self> {
        let (client, stream) = tokio::io::duplex(1 << 17);

        let config = Config::default().with_name("test-server").with_version("1.0.0");
        let server = Server::new(config, registry);

        tokio::spawn(async move {
            let server = server.serve(stream).await.unwrap();
            server.waiting().await.unwrap();
        });

        let client = ServiceExt::serve((), client).await.map_err(io::Error::other)?;

        Ok(Self { client })
    }

    pub fn server_info(&self) -> Option<&ServerInfo> {
        self.client.peer_info()
    }

    pub async fn list_tools(&self) -> Result<ListToolsResult, ServiceError> {
        self.client.list_tools(Default::default()).await
    }

    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Vec<(&str, Value)>,
    ) -> Result<CallToolResult, ServiceError> {
        let arguments = arguments
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();

        self.client
            .call_tool(CallToolRequestParam {
                name: name.to_string().into(),
                arguments: Some(arguments),
            })
            .await
    }

    pub async fn cancel(self) -> io::Result<()> {
        self.client.cancel().await.map_err(io::Error::other)?;
        Ok(())
    }
}

pub trait CallToolResultExt {
    fn text(&self) -> &str;
}

impl CallToolResultExt for CallToolResult {
    fn text(&self) -> &str {
        &self.content[0].as_text().unwrap().text
    }
}

/// Unwraps the JSON-RPC error returned by the server
pub fn mcp_error(err: ServiceError) -> ErrorData {
    match err {
        ServiceError::McpError(err) => err,
        other => panic!("expected an MCP error, got {other:?}"),
    }
}

/// A handler that always fails, for exercising error reporting.
pub async fn failing_handler(_input: ValidatedInput) -> anyhow::Result<ToolResult> {
    anyhow::bail!("upstream unavailable")
}
