//! Typed HTTP client for the gateway API.

use reqwest::StatusCode;
use thiserror::Error;

use crate::core::gateway::{ServerTools, ToolCallRequest, ToolCallResponse};
use crate::domains::servers::ServerDescriptor;
use crate::domains::tools::types::ToolDefinition;

/// Errors raised by the gateway client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the body could not be decoded.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-success status.
    #[error("Gateway returned {status}: {message}")]
    Status { status: StatusCode, message: String },
}

/// A thin typed consumer of the gateway's HTTP API.
///
/// This is the state layer the dashboard frontend sits on; it performs no
/// rendering and keeps no state of its own (the activity log lives in
/// [`super::activity::ActivityLog`]).
#[derive(Debug, Clone)]
pub struct GatewayClient {
    base_url: String,
    http: reqwest::Client,
}

impl GatewayClient {
    /// Create a client against a gateway base url (e.g.
    /// `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the server directory.
    pub async fn get_servers(&self) -> Result<Vec<ServerDescriptor>, ClientError> {
        self.get("/servers").await
    }

    /// Fetch the tool list of one server.
    pub async fn get_server_tools(
        &self,
        server_id: &str,
    ) -> Result<Vec<ToolDefinition>, ClientError> {
        self.get(&format!("/servers/{server_id}/tools")).await
    }

    /// Fetch the tools of every server.
    pub async fn get_all_tools(&self) -> Result<Vec<ServerTools>, ClientError> {
        self.get("/tools").await
    }

    /// Invoke a tool. The gateway always answers with an envelope, so a
    /// `success: false` outcome is an `Ok` here.
    pub async fn call_tool(
        &self,
        request: &ToolCallRequest,
    ) -> Result<ToolCallResponse, ClientError> {
        let response = self
            .http
            .post(format!("{}/tools/call", self.base_url))
            .json(request)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, message });
        }
        Ok(response.json().await?)
    }
}
