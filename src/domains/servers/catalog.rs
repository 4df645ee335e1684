//! The server/tool catalog - the static seed data everything else reads.
//!
//! The catalog maps mocked MCP servers to the tool lists they expose. It is
//! loaded once at startup, either from a JSON file or from the embedded
//! default, and is never mutated afterwards. Lookup logic lives in
//! [`super::directory::ServerDirectory`] and the tools registry; this module
//! only owns the data.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::Result;
use crate::domains::tools::definitions::{CalculatorTool, TextAnalyzerTool};
use crate::domains::tools::types::ToolDefinition;

/// A mocked MCP server visible on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerDescriptor {
    pub id: String,
    pub name: String,
    pub url: String,
    pub description: String,
    pub is_active: bool,
}

/// The full seed data set: server descriptors plus per-server tool lists.
///
/// Invariant (assumed, not enforced): every key in `tools` corresponds to a
/// known server id. A missing entry degrades to the fallback tool list at
/// lookup time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub servers: Vec<ServerDescriptor>,

    /// Tool lists keyed by server id.
    #[serde(default)]
    pub tools: HashMap<String, Vec<ToolDefinition>>,
}

impl Default for Catalog {
    fn default() -> Self {
        let servers = vec![
            ServerDescriptor {
                id: "mock-server-1".to_string(),
                name: "Analytics MCP Server".to_string(),
                url: "http://localhost:3003/mcp".to_string(),
                description: "Server for text analysis and data processing tools".to_string(),
                is_active: true,
            },
            ServerDescriptor {
                id: "mock-server-2".to_string(),
                name: "Calculator MCP Server".to_string(),
                url: "http://localhost:3004/mcp".to_string(),
                description: "Server for mathematical operations".to_string(),
                is_active: true,
            },
        ];

        let mut tools = HashMap::new();
        tools.insert(
            "mock-server-1".to_string(),
            vec![TextAnalyzerTool::definition()],
        );
        tools.insert(
            "mock-server-2".to_string(),
            vec![CalculatorTool::definition()],
        );

        Self { servers, tools }
    }
}

impl Catalog {
    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let catalog: Self = serde_json::from_str(&contents)?;
        info!(
            "Loaded catalog from {}: {} servers, {} tool lists",
            path.display(),
            catalog.servers.len(),
            catalog.tools.len()
        );
        Ok(catalog)
    }
}
