//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and the auth pages apply identical redirect behavior,
//! driven by the shared `AuthState` signal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use auth::GuardDecision;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Route to send the user to from a protected page, if any.
pub fn guard_redirect(state: &AuthState) -> Option<&'static str> {
    match state.guard_decision()? {
        GuardDecision::Allow => None,
        GuardDecision::Redirect(route) => Some(route),
    }
}

/// Where an already signed-in visitor of the login or register page goes.
pub fn signed_in_redirect(state: &AuthState) -> Option<&'static str> {
    state.is_logged_in().then_some("/")
}

/// Redirect whenever `target` yields a route for the current auth state.
pub fn install_redirect<F>(auth: RwSignal<AuthState>, target: fn(&AuthState) -> Option<&'static str>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let route = auth.with(target);
        if let Some(route) = route {
            navigate(
                route,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}

/// Navigate whenever an async flow parks a route in `pending`.
///
/// Async tasks cannot hold the router's navigate handle, so they set the
/// signal and this effect performs the navigation.
pub fn follow_pending<F>(pending: RwSignal<Option<&'static str>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if let Some(route) = pending.get() {
            navigate(route, NavigateOptions::default());
        }
    });
}
