//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the dashboard
//! server: error handling, configuration, the gateway over the domain
//! services, and the HTTP transport.

pub mod config;
pub mod error;
pub mod gateway;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use gateway::{McpGateway, ServerTools, ToolCallRequest, ToolCallResponse};
pub use transport::HttpTransport;
