//! Session, guard, and form logic shared by the browser app and the CLI.
//!
//! This crate owns everything about authentication that does not depend on a
//! UI toolkit or an HTTP stack. The remote API is reached through the
//! [`HttpTransport`] seam and the bearer token is persisted through the
//! [`TokenStore`] seam, so the `client` crate plugs in `gloo-net` and
//! `localStorage` while `cli` plugs in `reqwest` and a token file.
//!
//! FLOW
//! ====
//! Forms validate locally and produce request DTOs. [`AuthGateway`] sends
//! them, persists the returned token, fetches the profile, and publishes the
//! resulting [`Session`] to registered observers. Route guards read the
//! session snapshot through [`guard::check`].

pub mod config;
pub mod error;
pub mod forms;
pub mod gateway;
pub mod guard;
pub mod session;
pub mod storage;
pub mod transport;
pub mod types;

#[cfg(test)]
#[path = "test_support.rs"]
mod test_support;

pub use config::ApiConfig;
pub use error::{AuthError, StorageError, TransportError};
pub use gateway::AuthGateway;
pub use guard::GuardDecision;
pub use session::{Session, SessionStore, SubscriptionId};
pub use storage::{MemoryTokenStore, TOKEN_STORAGE_KEY, TokenStore};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method};
pub use types::{AuthResponse, LoginRequest, PasswordChange, RegisterRequest, Subscription, User, UserUpdate};
