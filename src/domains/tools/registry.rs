//! Tool Registry - per-server tool lists and the fallback list.
//!
//! The registry is a read-only view over the catalog's tool table, keyed by
//! server id. A miss never surfaces as an error from the public lookup;
//! callers degrade to the fallback list. The strict path additionally
//! validates registered definitions, which is what gives the dashboard-wide
//! aggregation something real to be tolerant of.

use std::collections::HashMap;

use super::ToolError;
use super::types::{ParameterType, ToolDefinition, ToolParameter};

/// Tool registry - maps server ids to their registered tool lists.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Vec<ToolDefinition>>,
}

impl ToolRegistry {
    /// Create a registry over the given tool table.
    pub fn new(tools: HashMap<String, Vec<ToolDefinition>>) -> Self {
        Self { tools }
    }

    /// Look up the registered tool list for a server id.
    pub fn tools_for(&self, server_id: &str) -> Option<&[ToolDefinition]> {
        self.tools.get(server_id).map(Vec::as_slice)
    }

    /// Look up and validate the registered tool list for a server id.
    ///
    /// Returns `Ok(None)` when no list is registered (callers degrade to the
    /// fallback) and an error when a registered definition is malformed.
    pub fn validated_tools_for(
        &self,
        server_id: &str,
    ) -> Result<Option<&[ToolDefinition]>, ToolError> {
        match self.tools.get(server_id) {
            None => Ok(None),
            Some(defs) => {
                for def in defs {
                    validate_definition(def)?;
                }
                Ok(Some(defs.as_slice()))
            }
        }
    }

    /// The one-element fallback list returned when a server's real tool
    /// list cannot be resolved.
    pub fn default_tools() -> Vec<ToolDefinition> {
        vec![ToolDefinition::new(
            "default_tool",
            "Default mock tool",
            vec![ToolParameter::new(
                "input",
                ParameterType::String,
                "Input parameter",
                true,
            )],
        )]
    }
}

fn validate_definition(def: &ToolDefinition) -> Result<(), ToolError> {
    if def.name.trim().is_empty() {
        return Err(ToolError::invalid_definition(
            "tool definition has an empty name",
        ));
    }
    for param in &def.parameters {
        if param.name.trim().is_empty() {
            return Err(ToolError::invalid_definition(format!(
                "tool `{}` declares a parameter with an empty name",
                def.name
            )));
        }
    }
    Ok(())
}
