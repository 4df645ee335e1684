//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur while resolving or executing tools.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The calculator was asked to divide by zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// The calculator was asked to perform an operation it does not know.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// A supplied parameter was missing or did not match its declared type.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A registered tool definition in the catalog is malformed.
    #[error("Invalid tool definition: {0}")]
    InvalidDefinition(String),

    /// The tool execution failed for a reason with no dedicated variant.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

impl ToolError {
    /// Create a new "invalid parameter" error.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Create a new "invalid definition" error.
    pub fn invalid_definition(msg: impl Into<String>) -> Self {
        Self::InvalidDefinition(msg.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }
}
