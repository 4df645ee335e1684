//! HTTP transport implementation.
//!
//! Plain HTTP/JSON routes over the gateway, consumed by the dashboard
//! frontend. Failure policy per route: `GET /servers/{id}/tools` is the
//! only route that maps a domain error to an HTTP status (404); tool
//! invocation always answers 200 with the envelope, and the dashboard-wide
//! aggregation is partial-failure tolerant.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::{TransportError, TransportResult};
use crate::core::config::HttpConfig;
use crate::core::gateway::{McpGateway, ToolCallRequest};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    gateway: Arc<McpGateway>,
}

impl AppState {
    /// Create state over a gateway.
    pub fn new(gateway: McpGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport. Blocks until the server shuts down.
    pub async fn run(self, gateway: McpGateway) -> TransportResult<()> {
        let addr = self.address();

        let mut app = build_router(AppState::new(gateway)).layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (HTTP/JSON, CORS {})", addr, cors_status);
        info!("  → Servers:  GET  /servers");
        info!("  → Tools:    GET  /tools");
        info!("  → Call:     POST /tools/call");
        info!("  → Health:   GET  /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the dashboard router over the given state.
///
/// Exposed separately from [`HttpTransport::run`] so tests can drive the
/// router in-process without binding a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/servers", get(get_servers))
        .route("/servers/{server_id}/tools", get(get_server_tools))
        .route("/tools", get(get_all_tools))
        .route("/tools/call", post(call_tool))
        .with_state(state)
}

/// Root handler - provides API info.
async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "MCP Dashboard Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "servers": "/servers",
            "serverTools": "/servers/{serverId}/tools",
            "tools": "/tools",
            "call": "/tools/call",
            "health": "/health"
        }
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// `GET /servers` - the static server directory.
async fn get_servers(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.gateway.list_servers().to_vec())
}

/// `GET /servers/{server_id}/tools` - one server's tool list, 404 on an
/// unknown id.
async fn get_server_tools(
    State(state): State<AppState>,
    Path(server_id): Path<String>,
) -> Response {
    match state.gateway.server_tools(&server_id) {
        Ok(tools) => Json(tools).into_response(),
        Err(e) => {
            warn!("Tool listing rejected: {}", e);
            (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// `GET /tools` - tools of every server, partial-failure tolerant.
async fn get_all_tools(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.gateway.all_tools())
}

/// `POST /tools/call` - invoke a tool; always a 200 envelope.
async fn call_tool(
    State(state): State<AppState>,
    Json(request): Json<ToolCallRequest>,
) -> impl IntoResponse {
    Json(state.gateway.call_tool(request).await)
}
