//! Guard wrapper for routes under the protected sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders through this component. The decision is
//! re-evaluated from the current `AuthState` on each navigation and whenever
//! the session changes, so a logout on a protected page also redirects.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{guard_redirect, install_redirect};

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_redirect(auth, guard_redirect, use_navigate());

    view! {
        <Show
            when=move || auth.with(AuthState::is_logged_in)
            fallback=|| view! { <div class="guard-pending">"Checking your session..."</div> }
        >
            {children()}
        </Show>
    }
}
