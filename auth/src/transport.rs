//! Generic JSON request/response transport seam.
//!
//! The gateway describes a call as an [`ApiRequest`] with a path relative to
//! the API base URL; implementations resolve the URL, attach the bearer
//! header, and hand back the status plus the decoded JSON body. Any HTTP
//! status is a successful transport result; only failures to obtain a
//! response are [`TransportError`]s.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::TransportError;

/// API paths consumed by the client, relative to the base URL.
pub mod endpoints {
    pub const TOKEN: &str = "/auth/token";
    pub const REGISTER: &str = "/auth/register";
    pub const ME: &str = "/users/me";
    pub const PASSWORD: &str = "/users/me/password";
    pub const SUBSCRIPTION: &str = "/users/me/subscription";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// One outgoing API call.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base, e.g. `/users/me`.
    pub path: String,
    /// Bearer token for the `Authorization` header.
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::Get,
            path: path.to_owned(),
            bearer: None,
            body: None,
        }
    }

    /// `POST` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Encode`] if `body` cannot be serialized.
    pub fn post<B: Serialize>(path: &str, body: &B) -> Result<Self, TransportError> {
        Self::with_body(Method::Post, path, body)
    }

    /// `PUT` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Encode`] if `body` cannot be serialized.
    pub fn put<B: Serialize>(path: &str, body: &B) -> Result<Self, TransportError> {
        Self::with_body(Method::Put, path, body)
    }

    #[must_use]
    pub fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }

    fn with_body<B: Serialize>(method: Method, path: &str, body: &B) -> Result<Self, TransportError> {
        let body = serde_json::to_value(body).map_err(|e| TransportError::Encode(e.to_string()))?;
        Ok(Self {
            method,
            path: path.to_owned(),
            bearer: None,
            body: Some(body),
        })
    }
}

/// Status and JSON body of a completed call. Empty bodies decode as `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Build a response from raw body text as received off the wire.
    /// Blank text becomes `null`; non-JSON text is kept as a JSON string.
    #[must_use]
    pub fn from_text(status: u16, text: &str) -> Self {
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
        };
        Self { status, body }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body into a typed payload.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Decode`] when the body has the wrong shape.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        serde_json::from_value(self.body.clone()).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// Sends [`ApiRequest`]s to the remote API.
///
/// Futures are not required to be `Send` so browser implementations can hold
/// JS handles across awaits.
#[async_trait(?Send)]
pub trait HttpTransport {
    /// Perform one call.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no HTTP response was obtained.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

#[async_trait(?Send)]
impl<T: HttpTransport + ?Sized> HttpTransport for Rc<T> {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        (**self).send(request).await
    }
}
