//! Text analyzer tool definition.
//!
//! A mock tool that computes word count, a naive sentiment estimate, and a
//! character count for a block of text.

use serde_json::{Map, Value, json};
use tracing::info;

use crate::domains::tools::types::{ParameterType, ToolDefinition, ToolParameter};

/// Text analyzer tool - word count and sentiment over a text parameter.
pub struct TextAnalyzerTool;

impl TextAnalyzerTool {
    /// Tool name as exposed to the dashboard.
    pub const NAME: &'static str = "text_analyzer";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Analyze a block of text: word count, sentiment estimate, and character count.";

    /// The declared definition registered in the catalog.
    pub fn definition() -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            Self::DESCRIPTION,
            vec![ToolParameter {
                name: "text".to_string(),
                kind: ParameterType::String,
                description: "Text to analyze".to_string(),
                // Missing text degrades to the empty string, so it is
                // declared optional with an explicit default.
                required: false,
                default: Some(Value::String(String::new())),
            }],
        )
    }

    /// Execute the mock analysis. A missing `text` parameter is treated as
    /// the empty string, so this never fails.
    pub fn execute(parameters: &Map<String, Value>) -> Value {
        let text = parameters
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default();

        let words: Vec<&str> = text.split_whitespace().collect();
        let word_count = words.len();
        let sentiment = if word_count > 10 {
            "positive"
        } else if word_count > 5 {
            "neutral"
        } else {
            "negative"
        };

        info!("Analyzed {} words, sentiment {}", word_count, sentiment);

        json!({
            "wordCount": word_count,
            "sentiment": sentiment,
            "characters": text.chars().count(),
            "words": words,
        })
    }
}
