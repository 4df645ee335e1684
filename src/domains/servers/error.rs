//! Server-directory error types.

use thiserror::Error;

/// Errors that can occur during server directory lookups.
#[derive(Debug, Error)]
pub enum ServerError {
    /// No server with the given id exists in the directory.
    #[error("Server not found: {0}")]
    NotFound(String),
}

impl ServerError {
    /// Create a new "not found" error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }
}
