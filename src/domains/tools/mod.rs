//! Tools domain module.
//!
//! This module handles everything tool-related: the static definitions the
//! mock servers expose, the registry that maps server ids to tool lists,
//! and the dispatcher that resolves and executes mock tool calls.
//!
//! ## Architecture
//!
//! - `definitions/` - individual mock tool implementations (one file per tool)
//! - `types.rs` - tool/parameter wire types
//! - `registry.rs` - per-server tool tables and the fallback list
//! - `dispatcher.rs` - url resolution, parameter validation, mock execution
//! - `error.rs` - tool-specific error types

pub mod definitions;
pub mod dispatcher;
mod error;
pub mod registry;
pub mod types;

pub use dispatcher::ToolDispatcher;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use types::{ParameterType, ToolDefinition, ToolParameter};
