//! MCP Dashboard Server Library
//!
//! Backend for a dashboard that lists mocked MCP tool-provider servers,
//! lists the callable tools each exposes, and lets a caller invoke one with
//! parameters, receiving a uniform result envelope.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - **core**: Infrastructure - configuration, error handling, the gateway,
//!   and the HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **servers**: the static server catalog and directory
//!   - **tools**: tool definitions, registry, and the mock dispatcher
//! - **client**: typed consumer of the gateway API plus the bounded
//!   recent-activity log
//!
//! # Example
//!
//! ```rust,no_run
//! use mcp_dashboard_server::{Config, McpGateway};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let gateway = McpGateway::new(&config)?;
//!     // Serve it over HTTP...
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpGateway, Result};
