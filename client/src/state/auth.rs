//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The value is a projection of
//! the gateway's session; components never write it directly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use auth::{GuardDecision, Session, User, guard};

/// Authentication state tracking the current user and restore status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the startup restore of a stored token has finished.
    pub loading: bool,
}

impl AuthState {
    /// Cold-start state: no user yet, restore pending.
    pub fn restoring() -> Self {
        Self { user: None, loading: true }
    }

    /// Apply a session broadcast from the gateway.
    pub fn apply(&mut self, session: Option<&Session>) {
        self.user = session.map(|s| s.user.clone());
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Guard decision for a protected route, or `None` while the restore is
    /// still pending and no decision can be made yet.
    pub fn guard_decision(&self) -> Option<GuardDecision> {
        if self.loading && self.user.is_none() {
            return None;
        }
        Some(if self.user.is_some() {
            GuardDecision::Allow
        } else {
            GuardDecision::Redirect(guard::LOGIN_ROUTE)
        })
    }

    /// Name shown in the header menu.
    pub fn display_name(&self) -> String {
        self.user.as_ref().map(User::display_name).unwrap_or_default()
    }
}
