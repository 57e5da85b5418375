//! Raw HTTP transport
//!
//! A `Transport` only reports failures to obtain a response. Non-2xx answers
//! come back as `Ok(HttpResponse)` and are judged by `ServerCommunicator`.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::CommunicatorConfig;
use crate::error::{CommunicatorError, Result};

/// Status and raw body of a backend response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<HttpResponse>;

    async fn post(&self, path: &str, body: Option<Value>) -> Result<HttpResponse>;
}

/// reqwest-backed transport
///
/// Keeps a cookie store so the session cookie set by the backend on login is
/// replayed on `/api/me` and `/auth/logout`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(config: &CommunicatorConfig) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| CommunicatorError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL and a path with exactly one slash
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn read(response: reqwest::Response) -> Result<HttpResponse> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| CommunicatorError::Transport(format!("Failed to read body: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, path: &str) -> Result<HttpResponse> {
        let url = self.url(path);
        debug!(url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CommunicatorError::Transport(format!("Request failed: {}", e)))?;

        Self::read(response).await
    }

    async fn post(&self, path: &str, body: Option<Value>) -> Result<HttpResponse> {
        let url = self.url(path);
        debug!(url = %url, has_body = body.is_some(), "POST");

        let mut request = self.client.post(&url);
        if let Some(body) = body.as_ref() {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CommunicatorError::Transport(format!("Request failed: {}", e)))?;

        Self::read(response).await
    }
}
