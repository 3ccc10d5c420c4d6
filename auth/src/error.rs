//! Error taxonomy for auth operations.
//!
//! ERROR HANDLING
//! ==============
//! Every remote failure is terminal for the user action that caused it; there
//! are no retries. UI code renders [`AuthError::user_message`], which prefers
//! the server's `detail` text and otherwise falls back to a per-action
//! generic message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

use crate::forms::FieldErrors;

/// Shown when the network itself failed and there is no payload to quote.
pub const NETWORK_FAILED: &str = "Unable to reach the server. Please try again.";

/// Shown when the profile could not be loaded after a successful login.
pub const PROFILE_FAILED: &str = "Could not load your profile. Please try again.";

/// Failure of the request/response transport itself.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Network(String),
    /// A request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(String),
    /// The response body was not the JSON shape the caller expected.
    #[error("failed to decode response body: {0}")]
    Decode(String),
    /// No transport exists in this build (e.g. browser calls on a native target).
    #[error("transport not available in this environment")]
    Unavailable,
}

/// Failure of the persistent token storage.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backing store cannot be reached at all.
    #[error("token storage unavailable")]
    Unavailable,
    /// A read, write, or delete failed.
    #[error("token storage failed: {0}")]
    Io(String),
}

/// Error returned by [`crate::AuthGateway`] operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Local form checks failed; no request was sent.
    #[error("{0}")]
    Validation(FieldErrors),
    /// The server rejected the credentials or the bearer token (401/403).
    #[error("{message}")]
    Authentication { message: String },
    /// The server answered with another non-success status.
    #[error("{message}")]
    Remote { status: u16, message: String },
    /// The request could not be completed.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Credentials were accepted but the profile could not be loaded.
    #[error("profile fetch failed: {0}")]
    Profile(String),
    /// The operation needs a signed-in session.
    #[error("not signed in")]
    NotAuthenticated,
    /// The token could not be persisted.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Human-readable text for display next to a form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(errors) => errors.to_string(),
            Self::Authentication { message } | Self::Remote { message, .. } => message.clone(),
            Self::Transport(_) => NETWORK_FAILED.to_owned(),
            Self::Profile(_) => PROFILE_FAILED.to_owned(),
            Self::NotAuthenticated => "Please log in to continue.".to_owned(),
            Self::Storage(_) => "Could not save your session in this browser.".to_owned(),
        }
    }

    /// True when the server refused the presented credentials or token.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}

/// Best-effort message from an error payload.
///
/// Accepts `{"detail": "text"}` and the validation shape
/// `{"detail": [{"msg": "text", ...}]}`.
#[must_use]
pub fn detail_message(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(Value::as_str))
            .map(str::to_owned),
        _ => None,
    }
}

/// Classify a non-success response, quoting the payload when possible.
pub(crate) fn rejection(status: u16, body: &Value, fallback: &str) -> AuthError {
    let message = detail_message(body).unwrap_or_else(|| fallback.to_owned());
    match status {
        401 | 403 => AuthError::Authentication { message },
        status => AuthError::Remote { status, message },
    }
}
