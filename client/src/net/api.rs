//! Browser HTTP transport for the auth gateway.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every send fails with
//! [`TransportError::Unavailable`], since there is no browser fetch.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses are returned as ordinary responses; the gateway maps
//! them to user-facing errors. Only fetch and body-read failures surface as
//! transport errors.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use auth::{ApiConfig, ApiRequest, ApiResponse, HttpTransport, TransportError};

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "csr"))]
fn fetch_failed_message(method: auth::Method, url: &str, reason: &str) -> String {
    format!("{} {url} failed: {reason}", method.as_str())
}

/// `fetch`-backed transport rooted at the configured API base URL.
#[derive(Clone, Debug)]
pub struct BrowserTransport {
    config: ApiConfig,
}

impl BrowserTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use auth::Method;
            use gloo_net::http::Request;

            let url = self.config.url(&request.path);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
            };
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &bearer_header(token));
            }
            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::Encode(e.to_string()))?;

            let response = prepared.send().await.map_err(|e| {
                let message = fetch_failed_message(request.method, &url, &e.to_string());
                log::warn!("{message}");
                TransportError::Network(message)
            })?;
            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| TransportError::Decode(e.to_string()))?;
            Ok(ApiResponse::from_text(status, &text))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}
