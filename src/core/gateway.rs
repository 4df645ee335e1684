//! Gateway - the request/response boundary over directory and dispatcher.
//!
//! The gateway owns the four dashboard operations and the envelope policy:
//! `server_tools` surfaces an unknown id as an error (the transport maps it
//! to 404), while `call_tool` never errors to its caller - every outcome,
//! success or failure, is expressed as a [`ToolCallResponse`] envelope. The
//! two failure policies are intentionally different and both are load-bearing
//! for the dashboard frontend.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::core::Result;
use crate::core::config::Config;
use crate::domains::servers::{Catalog, ServerDescriptor, ServerDirectory, ServerError};
use crate::domains::tools::types::ToolDefinition;
use crate::domains::tools::{ToolDispatcher, ToolRegistry};

/// Errors raised while resolving a tool invocation request, before any
/// dispatch happens. These never escape the gateway; they become failure
/// envelopes.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request carried no server id.
    #[error("mcpServerId is required but was not provided")]
    MissingServerId,

    /// The request named a server id the directory does not know.
    #[error("Server not found: {id}. Available servers: {available}")]
    UnknownServer { id: String, available: String },
}

/// A tool invocation request, as posted by the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallRequest {
    pub tool_name: String,

    #[serde(default)]
    pub mcp_server_id: Option<String>,

    #[serde(default)]
    pub parameters: Map<String, Value>,
}

/// The uniform invocation envelope. Exactly one of `result`/`error` is
/// populated, depending on `success`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub time_stamp: DateTime<Utc>,

    /// Elapsed wall time of the invocation, in milliseconds.
    pub duration: u64,
}

impl ToolCallResponse {
    fn success(result: Value, duration: u64) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
            time_stamp: Utc::now(),
            duration,
        }
    }

    fn failure(error: String, duration: u64) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error),
            time_stamp: Utc::now(),
            duration,
        }
    }
}

/// One row of the dashboard-wide tool aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerTools {
    pub server: ServerDescriptor,
    pub tools: Vec<ToolDefinition>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The gateway over the server directory and tool dispatcher.
#[derive(Debug, Clone)]
pub struct McpGateway {
    directory: Arc<ServerDirectory>,
    dispatcher: ToolDispatcher,
}

impl McpGateway {
    /// Build a gateway from configuration: loads the catalog and wires the
    /// directory and dispatcher.
    pub fn new(config: &Config) -> Result<Self> {
        let catalog = config.catalog.load()?;
        Ok(Self::with_catalog(
            catalog,
            Duration::from_millis(config.mock.latency_ms),
        ))
    }

    /// Build a gateway over an explicit catalog.
    pub fn with_catalog(catalog: Catalog, latency: Duration) -> Self {
        let directory = Arc::new(ServerDirectory::new(catalog.servers));
        let registry = Arc::new(ToolRegistry::new(catalog.tools));
        let dispatcher = ToolDispatcher::new(directory.clone(), registry, latency);
        Self {
            directory,
            dispatcher,
        }
    }

    /// List all known servers, in catalog order.
    pub fn list_servers(&self) -> &[ServerDescriptor] {
        info!("Fetching available MCP servers");
        self.directory.servers()
    }

    /// List the tools of one server, by id.
    ///
    /// An unknown id is an error here; once the id resolves, tool-list
    /// resolution by url degrades to the fallback list and never fails.
    pub fn server_tools(&self, server_id: &str) -> std::result::Result<Vec<ToolDefinition>, ServerError> {
        info!("Fetching tools for server: {}", server_id);

        let server = self
            .directory
            .find(server_id)
            .ok_or_else(|| ServerError::not_found(server_id))?;

        Ok(self.dispatcher.get_tools(&server.url))
    }

    /// Aggregate the tools of every server.
    ///
    /// Fetches are sequential; a per-server failure records an empty tool
    /// list plus the error string and does not abort the remaining fetches.
    pub fn all_tools(&self) -> Vec<ServerTools> {
        info!("Fetching all tools from all servers");

        self.directory
            .servers()
            .iter()
            .map(|server| match self.dispatcher.try_get_tools(&server.url) {
                Ok(tools) => ServerTools {
                    server: server.clone(),
                    tools,
                    error: None,
                },
                Err(e) => {
                    warn!("Failed to fetch tools from server {}: {}", server.name, e);
                    ServerTools {
                        server: server.clone(),
                        tools: Vec::new(),
                        error: Some(e.to_string()),
                    }
                }
            })
            .collect()
    }

    /// Invoke a tool, always producing an envelope.
    ///
    /// Measures elapsed wall time across the whole invocation, including the
    /// dispatcher's artificial latency.
    pub async fn call_tool(&self, request: ToolCallRequest) -> ToolCallResponse {
        let started = Instant::now();
        info!("Calling tool: {}", request.tool_name);

        match self.invoke(&request).await {
            Ok(result) => {
                let duration = started.elapsed().as_millis() as u64;
                info!("Tool call completed successfully in {}ms", duration);
                ToolCallResponse::success(result, duration)
            }
            Err(message) => {
                let duration = started.elapsed().as_millis() as u64;
                error!("Tool call failed: {}", message);
                ToolCallResponse::failure(message, duration)
            }
        }
    }

    async fn invoke(&self, request: &ToolCallRequest) -> std::result::Result<Value, String> {
        let server_id = request
            .mcp_server_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| GatewayError::MissingServerId.to_string())?;

        let server = self.directory.find(server_id).ok_or_else(|| {
            GatewayError::UnknownServer {
                id: server_id.to_string(),
                available: self.directory.known_ids(),
            }
            .to_string()
        })?;

        self.dispatcher
            .call_tool(&server.url, &request.tool_name, &request.parameters)
            .await
            .map_err(|e| format!("Tool execution failed: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolDefinition;
    use serde_json::json;

    fn gateway() -> McpGateway {
        McpGateway::with_catalog(Catalog::default(), Duration::ZERO)
    }

    fn request(tool: &str, server_id: Option<&str>, parameters: Map<String, Value>) -> ToolCallRequest {
        ToolCallRequest {
            tool_name: tool.to_string(),
            mcp_server_id: server_id.map(String::from),
            parameters,
        }
    }

    #[test]
    fn test_list_servers_is_stable() {
        let gateway = gateway();
        let first: Vec<_> = gateway.list_servers().to_vec();
        let second: Vec<_> = gateway.list_servers().to_vec();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_server_tools_known_id() {
        let tools = gateway().server_tools("mock-server-1").unwrap();
        assert_eq!(tools[0].name, "text_analyzer");
    }

    #[test]
    fn test_server_tools_unknown_id_is_not_found() {
        let err = gateway().server_tools("mock-server-9").unwrap_err();
        assert!(matches!(err, ServerError::NotFound(id) if id == "mock-server-9"));
    }

    #[test]
    fn test_all_tools_partial_failure() {
        let mut catalog = Catalog::default();
        catalog.tools.insert(
            "mock-server-1".to_string(),
            vec![ToolDefinition::new("", "broken", vec![])],
        );
        let gateway = McpGateway::with_catalog(catalog, Duration::ZERO);

        let rows = gateway.all_tools();
        assert_eq!(rows.len(), 2);

        let failed = &rows[0];
        assert_eq!(failed.server.id, "mock-server-1");
        assert!(failed.tools.is_empty());
        assert!(failed.error.is_some());

        let healthy = &rows[1];
        assert_eq!(healthy.server.id, "mock-server-2");
        assert_eq!(healthy.tools[0].name, "calculator");
        assert!(healthy.error.is_none());
    }

    #[tokio::test]
    async fn test_call_tool_success_envelope() {
        let mut parameters = Map::new();
        parameters.insert("operation".to_string(), json!("add"));
        parameters.insert("a".to_string(), json!(2));
        parameters.insert("b".to_string(), json!(3));

        let response = gateway()
            .call_tool(request("calculator", Some("mock-server-2"), parameters))
            .await;
        assert!(response.success);
        assert!(response.error.is_none());
        assert_eq!(response.result.unwrap()["result"].as_f64(), Some(5.0));
    }

    #[tokio::test]
    async fn test_call_tool_missing_server_id() {
        let response = gateway().call_tool(request("calculator", None, Map::new())).await;
        assert!(!response.success);
        assert!(response.result.is_none());
        assert!(response.error.unwrap().contains("mcpServerId"));
    }

    #[tokio::test]
    async fn test_call_tool_empty_server_id() {
        let response = gateway().call_tool(request("calculator", Some(""), Map::new())).await;
        assert!(!response.success);
        assert!(response.error.unwrap().contains("mcpServerId"));
    }

    #[tokio::test]
    async fn test_call_tool_unknown_server_lists_available() {
        let response = gateway().call_tool(request("calculator", Some("mock-server-9"), Map::new())).await;
        assert!(!response.success);
        let error = response.error.unwrap();
        assert!(error.contains("mock-server-9"));
        assert!(error.contains("mock-server-1, mock-server-2"));
    }

    #[tokio::test]
    async fn test_call_tool_dispatch_failure_is_wrapped() {
        let mut parameters = Map::new();
        parameters.insert("operation".to_string(), json!("divide"));
        parameters.insert("a".to_string(), json!(1));
        parameters.insert("b".to_string(), json!(0));

        let response = gateway()
            .call_tool(request("calculator", Some("mock-server-2"), parameters))
            .await;
        assert!(!response.success);
        let error = response.error.unwrap();
        assert!(error.starts_with("Tool execution failed:"));
        assert!(error.contains("Division by zero"));
    }

    #[tokio::test]
    async fn test_call_tool_unknown_tool_succeeds() {
        let response = gateway().call_tool(request("foo", Some("mock-server-1"), Map::new())).await;
        assert!(response.success);
        let result = response.result.unwrap();
        assert_eq!(result["tool"], "foo");
        assert_eq!(result["mock"], true);
    }
}
