//! Fixtures and a recording stub transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;
use crate::session::Session;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport};
use crate::types::User;

pub fn sample_user() -> User {
    User {
        user_id: 1,
        username: "alice".to_owned(),
        email: "a@x.com".to_owned(),
        first_name: Some("Alice".to_owned()),
        last_name: None,
        created_at: "2024-05-01T10:00:00".to_owned(),
    }
}

pub fn sample_session(token: &str) -> Session {
    Session {
        user: sample_user(),
        token: token.to_owned(),
    }
}

pub fn token_body(token: &str) -> Value {
    serde_json::json!({
        "access_token": token,
        "token_type": "bearer",
        "user_id": 1,
        "email": "a@x.com",
        "username": "alice"
    })
}

pub fn profile_body() -> Value {
    serde_json::to_value(sample_user()).unwrap_or_default()
}

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct StubTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: Value) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(self, error: TransportError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.path.clone()).collect()
    }
}

#[async_trait(?Send)]
impl HttpTransport for StubTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no stubbed response".to_owned())))
    }
}
