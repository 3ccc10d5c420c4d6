//! `reqwest` transport for the auth gateway.
//!
//! ERROR HANDLING
//! ==============
//! Any HTTP status comes back as an [`ApiResponse`]; the gateway decides what
//! a non-success status means. Only connection and body-read failures become
//! [`TransportError`]s.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use async_trait::async_trait;
use auth::{ApiConfig, ApiRequest, ApiResponse, HttpTransport, Method, TransportError};
use serde_json::Value;

use crate::CliError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns the `reqwest` error if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    /// `GET /health` on the server root.
    ///
    /// # Errors
    ///
    /// [`CliError::Http`] if the server is unreachable or the body is not
    /// JSON, [`CliError::Health`] on a non-success status.
    pub(crate) async fn health(&self) -> Result<Value, CliError> {
        let url = format!("{}/health", self.config.server_root());
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CliError::Health(status.as_u16()));
        }
        Ok(response.json::<Value>().await?)
    }
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.config.url(&request.path);
        tracing::debug!(method = request.method.as_str(), %url, "api request");

        let mut builder = self.client.request(http_method(request.method), &url);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        tracing::debug!(status, %url, "api response");
        Ok(ApiResponse::from_text(status, &text))
    }
}
