//! Tool definitions module.
//!
//! This module exports all available mock tool implementations.
//! Each tool is defined in its own file for better maintainability.

pub mod calculator;
pub mod text_analyzer;

pub use calculator::CalculatorTool;
pub use text_analyzer::TextAnalyzerTool;
