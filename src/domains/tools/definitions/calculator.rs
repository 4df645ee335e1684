//! Calculator tool definition.
//!
//! A mock tool performing one of four arithmetic operations on two numbers.
//! Unlike the generic unknown-tool fallback, this tool fails loudly on bad
//! input: division by zero and unrecognized operations are errors.

use chrono::Utc;
use serde_json::{Map, Value, json};
use tracing::info;

use crate::domains::tools::ToolError;
use crate::domains::tools::types::{ParameterType, ToolDefinition, ToolParameter};

/// Calculator tool - basic arithmetic over `operation`, `a`, `b`.
pub struct CalculatorTool;

impl CalculatorTool {
    /// Tool name as exposed to the dashboard.
    pub const NAME: &'static str = "calculator";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Perform a basic arithmetic operation (add, subtract, multiply, divide) on two numbers.";

    /// The declared definition registered in the catalog.
    pub fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            Self::DESCRIPTION,
            vec![
                ToolParameter::new(
                    "operation",
                    ParameterType::String,
                    "One of: add, subtract, multiply, divide",
                    true,
                ),
                ToolParameter::new("a", ParameterType::Number, "First operand", true),
                ToolParameter::new("b", ParameterType::Number, "Second operand", true),
            ],
        )
    }

    /// Execute the calculation.
    pub fn execute(parameters: &Map<String, Value>) -> Result<Value, ToolError> {
        let operation = string_param(parameters, "operation")?;
        let a = number_param(parameters, "a")?;
        let b = number_param(parameters, "b")?;

        let result = match operation {
            "add" => a + b,
            "subtract" => a - b,
            "multiply" => a * b,
            "divide" => {
                if b == 0.0 {
                    return Err(ToolError::DivisionByZero);
                }
                a / b
            }
            other => return Err(ToolError::UnknownOperation(other.to_string())),
        };

        info!("Computed {} {} {} = {}", a, operation, b, result);

        Ok(json!({
            "operation": format!("{a} {operation} {b}"),
            "result": result,
            "timeStamp": Utc::now().to_rfc3339(),
        }))
    }
}

fn string_param<'a>(parameters: &'a Map<String, Value>, name: &str) -> Result<&'a str, ToolError> {
    parameters
        .get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| ToolError::invalid_parameter(format!("`{name}` must be a string")))
}

fn number_param(parameters: &Map<String, Value>, name: &str) -> Result<f64, ToolError> {
    parameters
        .get(name)
        .and_then(Value::as_f64)
        .ok_or_else(|| ToolError::invalid_parameter(format!("`{name}` must be a number")))
}
