//! Navigation guard for protected sections.
//!
//! The decision is a pure function of the session snapshot, evaluated on
//! every guarded navigation with no state carried between calls.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::Session;

/// Login entry point that denied navigations are sent to.
pub const LOGIN_ROUTE: &str = "/auth/login";

/// Route prefixes that require a signed-in session.
pub const PROTECTED_SECTIONS: [&str; 4] = ["/photos", "/events", "/people", "/profile"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Navigation proceeds.
    Allow,
    /// Navigation is cancelled and the user is sent to the given route.
    Redirect(&'static str),
}

impl GuardDecision {
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decide a navigation into a protected section.
#[must_use]
pub fn check(session: Option<&Session>) -> GuardDecision {
    if session.is_some() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(LOGIN_ROUTE)
    }
}

/// Whether `path` falls inside a protected section. Query strings and
/// fragments are ignored.
#[must_use]
pub fn requires_auth(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    PROTECTED_SECTIONS.iter().any(|section| {
        path.strip_prefix(section)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// Decide a navigation to any `path`; public routes are always allowed.
#[must_use]
pub fn decide(path: &str, session: Option<&Session>) -> GuardDecision {
    if requires_auth(path) {
        check(session)
    } else {
        GuardDecision::Allow
    }
}
