//! Tool Dispatcher - resolves tool lists by server url and runs mock calls.
//!
//! The dispatcher is constructed with the directory and registry it reads
//! from; there is no ambient global state. `get_tools` never fails - every
//! resolution problem degrades to the fallback list with a warning.
//! `call_tool` sleeps a fixed artificial latency to simulate a network
//! round-trip, validates the supplied parameter bag against the declared
//! definition when one exists, then dispatches on the tool name.
//!
//! Unknown tool names succeed with a generic mock payload while the
//! calculator fails on unknown operations. That asymmetry comes from the
//! product behavior this mocks and is kept on purpose.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::{Map, Value, json};
use tracing::{info, warn};

use crate::domains::servers::ServerDirectory;

use super::ToolError;
use super::definitions::{CalculatorTool, TextAnalyzerTool};
use super::registry::ToolRegistry;
use super::types::{ToolDefinition, ToolParameter};

/// Tool dispatcher - tool-list resolution and mock execution.
#[derive(Debug, Clone)]
pub struct ToolDispatcher {
    directory: Arc<ServerDirectory>,
    registry: Arc<ToolRegistry>,
    latency: Duration,
}

impl ToolDispatcher {
    /// Create a dispatcher over the given directory and registry.
    ///
    /// `latency` is the artificial delay applied to every `call_tool`.
    pub fn new(
        directory: Arc<ServerDirectory>,
        registry: Arc<ToolRegistry>,
        latency: Duration,
    ) -> Self {
        Self {
            directory,
            registry,
            latency,
        }
    }

    /// Resolve the tool list for a server url, degrading to the fallback
    /// list on any resolution problem. Never fails.
    pub fn get_tools(&self, server_url: &str) -> Vec<ToolDefinition> {
        info!("Getting tools for server: {}", server_url);

        match self.try_get_tools(server_url) {
            Ok(tools) => tools,
            Err(e) => {
                warn!(
                    "Tool resolution failed for {}, using fallback: {}",
                    server_url, e
                );
                ToolRegistry::default_tools()
            }
        }
    }

    /// Strict tool-list resolution used by the dashboard-wide aggregation.
    ///
    /// An unknown url or an unregistered server still degrades to the
    /// fallback list (absence is not an error), but a malformed registered
    /// list surfaces as an error instead of being papered over.
    pub fn try_get_tools(&self, server_url: &str) -> Result<Vec<ToolDefinition>, ToolError> {
        let Some(server) = self.directory.find_by_url(server_url) else {
            warn!("Server not found: {}", server_url);
            return Ok(ToolRegistry::default_tools());
        };

        match self.registry.validated_tools_for(&server.id)? {
            Some(tools) => Ok(tools.to_vec()),
            None => {
                warn!("Tools not found for server: {}", server.id);
                Ok(ToolRegistry::default_tools())
            }
        }
    }

    /// Execute a mock tool call.
    ///
    /// Sleeps the configured latency first; the await point has no
    /// cancellation or timeout path.
    pub async fn call_tool(
        &self,
        server_url: &str,
        tool_name: &str,
        parameters: &Map<String, Value>,
    ) -> Result<Value, ToolError> {
        info!("Calling tool {} on {}", tool_name, server_url);

        tokio::time::sleep(self.latency).await;

        if let Some(def) = self.declared_tool(server_url, tool_name) {
            validate_parameters(def, parameters)?;
        }

        match tool_name {
            TextAnalyzerTool::NAME => Ok(TextAnalyzerTool::execute(parameters)),
            CalculatorTool::NAME => CalculatorTool::execute(parameters),
            other => {
                info!("No mock implementation for {}, echoing request", other);
                Ok(json!({
                    "tool": other,
                    "parameters": parameters,
                    "message": "Mock execution completed successfully",
                    "timeStamp": Utc::now().to_rfc3339(),
                    "mock": true,
                }))
            }
        }
    }

    /// The declared definition for a tool, when the server resolves and
    /// registers one. Unknown tools have no declaration and skip validation.
    fn declared_tool(&self, server_url: &str, tool_name: &str) -> Option<&ToolDefinition> {
        let server = self.directory.find_by_url(server_url)?;
        let tools = self.registry.tools_for(&server.id)?;
        tools.iter().find(|t| t.name == tool_name)
    }
}

/// Validate a supplied parameter bag against a tool's declared parameters.
///
/// Required parameters must be present and non-null; supplied values for
/// declared parameters must match the declared type. Extra undeclared
/// entries are passed through untouched.
fn validate_parameters(
    def: &ToolDefinition,
    parameters: &Map<String, Value>,
) -> Result<(), ToolError> {
    for declared in &def.parameters {
        match parameters.get(&declared.name) {
            None | Some(Value::Null) => {
                if declared.required {
                    return Err(missing(def, declared));
                }
            }
            Some(value) => {
                if !declared.kind.matches(value) {
                    return Err(ToolError::invalid_parameter(format!(
                        "parameter `{}` of tool `{}` expects {}",
                        declared.name,
                        def.name,
                        declared.kind.name()
                    )));
                }
            }
        }
    }
    Ok(())
}

fn missing(def: &ToolDefinition, declared: &ToolParameter) -> ToolError {
    ToolError::invalid_parameter(format!(
        "missing required parameter `{}` for tool `{}`",
        declared.name, def.name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::servers::Catalog;
    use std::collections::HashMap;

    const ANALYTICS_URL: &str = "http://localhost:3003/mcp";
    const CALCULATOR_URL: &str = "http://localhost:3004/mcp";

    fn dispatcher() -> ToolDispatcher {
        dispatcher_for(Catalog::default())
    }

    fn dispatcher_for(catalog: Catalog) -> ToolDispatcher {
        ToolDispatcher::new(
            Arc::new(ServerDirectory::new(catalog.servers)),
            Arc::new(ToolRegistry::new(catalog.tools)),
            Duration::ZERO,
        )
    }

    fn params(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_get_tools_known_server() {
        let tools = dispatcher().get_tools(ANALYTICS_URL);
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "text_analyzer");
    }

    #[test]
    fn test_get_tools_unknown_url_falls_back() {
        let tools = dispatcher().get_tools("http://localhost:9999/mcp");
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "default_tool");
    }

    #[test]
    fn test_get_tools_unregistered_server_falls_back() {
        let mut catalog = Catalog::default();
        catalog.tools.remove("mock-server-1");
        let tools = dispatcher_for(catalog).get_tools(ANALYTICS_URL);
        assert_eq!(tools[0].name, "default_tool");
    }

    #[test]
    fn test_get_tools_malformed_list_falls_back() {
        let mut catalog = Catalog::default();
        catalog.tools.insert(
            "mock-server-1".to_string(),
            vec![ToolDefinition::new("", "broken", vec![])],
        );
        let tools = dispatcher_for(catalog).get_tools(ANALYTICS_URL);
        assert_eq!(tools[0].name, "default_tool");
    }

    #[test]
    fn test_try_get_tools_malformed_list_is_an_error() {
        let mut catalog = Catalog::default();
        catalog.tools.insert(
            "mock-server-1".to_string(),
            vec![ToolDefinition::new("", "broken", vec![])],
        );
        let err = dispatcher_for(catalog)
            .try_get_tools(ANALYTICS_URL)
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidDefinition(_)));
    }

    #[tokio::test]
    async fn test_call_text_analyzer() {
        let result = dispatcher()
            .call_tool(
                ANALYTICS_URL,
                "text_analyzer",
                &params(&[("text", json!("a b c d e f g h i j k"))]),
            )
            .await
            .unwrap();
        assert_eq!(result["wordCount"], 11);
        assert_eq!(result["sentiment"], "positive");
    }

    #[tokio::test]
    async fn test_call_calculator() {
        let result = dispatcher()
            .call_tool(
                CALCULATOR_URL,
                "calculator",
                &params(&[("operation", json!("add")), ("a", json!(2)), ("b", json!(3))]),
            )
            .await
            .unwrap();
        assert_eq!(result["result"].as_f64(), Some(5.0));
        assert_eq!(result["operation"], "2 add 3");
    }

    #[tokio::test]
    async fn test_call_calculator_divide_by_zero() {
        let err = dispatcher()
            .call_tool(
                CALCULATOR_URL,
                "calculator",
                &params(&[
                    ("operation", json!("divide")),
                    ("a", json!(1)),
                    ("b", json!(0)),
                ]),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::DivisionByZero));
    }

    #[tokio::test]
    async fn test_call_unknown_tool_succeeds_generically() {
        let result = dispatcher()
            .call_tool(ANALYTICS_URL, "foo", &params(&[("x", json!(1))]))
            .await
            .unwrap();
        assert_eq!(result["tool"], "foo");
        assert_eq!(result["mock"], true);
        assert_eq!(result["message"], "Mock execution completed successfully");
        assert_eq!(result["parameters"]["x"], 1);
    }

    #[tokio::test]
    async fn test_declared_parameter_type_is_enforced() {
        let err = dispatcher()
            .call_tool(
                ANALYTICS_URL,
                "text_analyzer",
                &params(&[("text", json!(42))]),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidParameter(msg) if msg.contains("text")));
    }

    #[tokio::test]
    async fn test_missing_required_parameter_is_rejected() {
        let err = dispatcher()
            .call_tool(
                CALCULATOR_URL,
                "calculator",
                &params(&[("operation", json!("add"))]),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidParameter(msg) if msg.contains('a')));
    }

    #[tokio::test]
    async fn test_missing_optional_text_defaults_to_empty() {
        let result = dispatcher()
            .call_tool(ANALYTICS_URL, "text_analyzer", &Map::new())
            .await
            .unwrap();
        assert_eq!(result["wordCount"], 0);
        assert_eq!(result["sentiment"], "negative");
    }

    #[tokio::test]
    async fn test_undeclared_tool_skips_validation() {
        // A server with no registered list has no declarations to check,
        // so the bag goes straight to mock dispatch.
        let mut catalog = Catalog::default();
        catalog.tools = HashMap::new();
        let result = dispatcher_for(catalog)
            .call_tool(ANALYTICS_URL, "text_analyzer", &params(&[("text", json!("hi"))]))
            .await
            .unwrap();
        assert_eq!(result["wordCount"], 1);
    }
}
