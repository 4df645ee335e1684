//! Servers domain module.
//!
//! Owns the static catalog of mocked MCP servers and the directory used to
//! look them up by id or url. Nothing in this domain mutates state after
//! startup.

pub mod catalog;
pub mod directory;
mod error;

pub use catalog::{Catalog, ServerDescriptor};
pub use directory::ServerDirectory;
pub use error::ServerError;
