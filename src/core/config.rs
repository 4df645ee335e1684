//! Configuration management for the dashboard server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::Result;
use crate::domains::servers::Catalog;

/// Main configuration structure for the dashboard server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP transport configuration.
    pub http: HttpConfig,

    /// Mock execution configuration.
    pub mock: MockConfig,

    /// Catalog (seed data) configuration.
    pub catalog: CatalogConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the service as reported on the info endpoint.
    pub name: String,

    /// The version of the service.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    pub host: String,

    /// Enable CORS for browser clients (the dashboard frontend runs on a
    /// different origin).
    pub enable_cors: bool,
}

/// Mock execution configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    /// Artificial latency applied to every tool call, in milliseconds.
    pub latency_ms: u64,
}

/// Catalog (seed data) configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Optional path to a JSON catalog file. When unset, the embedded
    /// default catalog is used.
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Load the configured catalog, falling back to the embedded default.
    pub fn load(&self) -> Result<Catalog> {
        match &self.path {
            Some(path) => Catalog::load(path),
            None => {
                info!("No catalog file configured, using embedded default");
                Ok(Catalog::default())
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "mcp-dashboard-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            http: HttpConfig {
                port: 3000,
                host: "127.0.0.1".to_string(),
                enable_cors: true,
            },
            mock: MockConfig { latency_ms: 200 },
            catalog: CatalogConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `MCP_DASH_`.
    /// For example: `MCP_DASH_HTTP_PORT`, `MCP_DASH_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_DASH_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_DASH_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(port) = std::env::var("MCP_DASH_HTTP_PORT") {
            if let Ok(port) = port.parse() {
                config.http.port = port;
            }
        }

        if let Ok(host) = std::env::var("MCP_DASH_HTTP_HOST") {
            config.http.host = host;
        }

        if let Ok(cors) = std::env::var("MCP_DASH_HTTP_CORS") {
            config.http.enable_cors = cors.to_lowercase() != "false" && cors != "0";
        }

        if let Ok(latency) = std::env::var("MCP_DASH_MOCK_LATENCY_MS") {
            if let Ok(latency) = latency.parse() {
                config.mock.latency_ms = latency;
            }
        }

        if let Ok(path) = std::env::var("MCP_DASH_CATALOG") {
            config.catalog.path = Some(PathBuf::from(path));
            info!("Catalog path set from environment: {:?}", config.catalog.path);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.http.port, 3000);
        assert!(config.http.enable_cors);
        assert_eq!(config.mock.latency_ms, 200);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_http_port_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DASH_HTTP_PORT", "8123");
        }
        let config = Config::from_env();
        assert_eq!(config.http.port, 8123);
        unsafe {
            std::env::remove_var("MCP_DASH_HTTP_PORT");
        }
    }

    #[test]
    fn test_cors_disabled_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DASH_HTTP_CORS", "false");
        }
        let config = Config::from_env();
        assert!(!config.http.enable_cors);
        unsafe {
            std::env::remove_var("MCP_DASH_HTTP_CORS");
        }
    }

    #[test]
    fn test_catalog_config_defaults_to_embedded() {
        let catalog = CatalogConfig::default().load().unwrap();
        assert_eq!(catalog.servers.len(), 2);
    }
}
