//! Browser-wide auth gateway and its bridge into Leptos state.
//!
//! SYSTEM CONTEXT
//! ==============
//! One gateway exists per page load. Every page and component reaches it
//! through [`gateway`]; the session it owns is mirrored into the
//! `RwSignal<AuthState>` provided by `App`.

use std::rc::Rc;

use auth::{ApiConfig, AuthGateway, SubscriptionId};
use leptos::prelude::*;

use crate::net::api::BrowserTransport;
use crate::state::auth::AuthState;
use crate::util::storage::BrowserTokenStore;

pub type BrowserGateway = AuthGateway<BrowserTransport, BrowserTokenStore>;

thread_local! {
    static GATEWAY: Rc<BrowserGateway> = Rc::new(AuthGateway::new(
        BrowserTransport::new(api_config()),
        BrowserTokenStore,
    ));
}

/// API location, optionally overridden at build time with `FACEREC_API_URL`.
pub fn api_config() -> ApiConfig {
    option_env!("FACEREC_API_URL").map_or_else(ApiConfig::default, ApiConfig::new)
}

/// Shared handle to the page's gateway.
pub fn gateway() -> Rc<BrowserGateway> {
    GATEWAY.with(Rc::clone)
}

/// Mirror every session change into `auth`.
pub fn bind_auth_state(auth: RwSignal<AuthState>) -> SubscriptionId {
    gateway().subscribe(move |session| auth.update(|state| state.apply(session)))
}

/// Restore a stored token once, then mark the auth state as loaded.
pub fn restore_into(auth: RwSignal<AuthState>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let restored = gateway().restore_session().await;
        if restored.is_none() {
            log::debug!("no session restored");
        }
        auth.update(|state| state.loading = false);
    });

    #[cfg(not(feature = "csr"))]
    auth.update(|state| state.loading = false);
}
