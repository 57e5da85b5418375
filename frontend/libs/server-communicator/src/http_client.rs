//! Backend HTTP client
//!
//! `get_request` and the raising form of `post_request` report every failure as
//! a `CommunicatorError`. The guaranteed GET and the non-raising POST are thin
//! adapters on top that absorb those errors into a fallback, so the absorption
//! policy lives in one place.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::CommunicatorConfig;
use crate::error::{CommunicatorError, Result};
use crate::transport::{HttpResponse, ReqwestTransport, Transport};

pub struct ServerCommunicator<T: Transport = ReqwestTransport> {
    transport: T,
}

impl ServerCommunicator<ReqwestTransport> {
    /// Create a communicator talking to the configured backend over HTTP
    pub fn from_config(config: &CommunicatorConfig) -> Result<Self> {
        Ok(Self::new(ReqwestTransport::new(config)?))
    }
}

impl<T: Transport> ServerCommunicator<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET `path` and decode the JSON body
    ///
    /// Non-2xx responses are `CommunicatorError::Status`. An empty body decodes
    /// as JSON `null`.
    pub async fn get_request<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let response = self.transport.get(path).await?;
        ensure_success(response).and_then(|body| decode_body(&body))
    }

    /// GET `path`, resolving to `fallback` on any failure
    pub async fn get_request_guaranteed<R>(&self, path: &str, fallback: R) -> R
    where
        R: DeserializeOwned,
    {
        match self.get_request(path).await {
            Ok(value) => value,
            Err(e) => {
                debug!(path = %path, error = %e, "Guaranteed GET resolved to fallback");
                fallback
            }
        }
    }

    /// POST `body` (or nothing) to `path`
    ///
    /// A successful empty response yields `Ok(None)`. With
    /// `raise_on_failure = false` every failure is logged and reported as
    /// `Ok(None)` instead of an error.
    pub async fn post_request<B, R>(
        &self,
        path: &str,
        body: Option<&B>,
        raise_on_failure: bool,
    ) -> Result<Option<R>>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        match self.try_post(path, body).await {
            Ok(value) => Ok(value),
            Err(e) if raise_on_failure => Err(e),
            Err(e) => {
                warn!(path = %path, error = %e, "POST failed, ignoring");
                Ok(None)
            }
        }
    }

    async fn try_post<B, R>(&self, path: &str, body: Option<&B>) -> Result<Option<R>>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let payload = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| CommunicatorError::Encode(e.to_string()))?;

        let response = self.transport.post(path, payload).await?;
        let body = ensure_success(response)?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        decode_body(&body).map(Some)
    }
}

fn ensure_success(response: HttpResponse) -> Result<String> {
    if response.is_success() {
        Ok(response.body)
    } else {
        Err(CommunicatorError::Status {
            status: response.status,
            body: response.body,
        })
    }
}

fn decode_body<R: DeserializeOwned>(body: &str) -> Result<R> {
    let body = body.trim();
    let body = if body.is_empty() { "null" } else { body };

    serde_json::from_str(body).map_err(|e| CommunicatorError::Decode(e.to_string()))
}
