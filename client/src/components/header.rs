//! Site header with primary navigation, user menu, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Feature links and the user menu only render for a signed-in user; anonymous
//! visitors get login and register links instead. Logout clears the session
//! synchronously and then reloads the landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;
use crate::state::session::gateway;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let dropdown_open = RwSignal::new(false);
    let mobile_open = RwSignal::new(false);

    let logged_in = move || auth.with(AuthState::is_logged_in);
    let username = move || auth.with(|a| a.user.as_ref().map(|u| u.username.clone()).unwrap_or_default());

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        dropdown_open.set(false);
        mobile_open.set(false);
        gateway().logout();
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    view! {
        <header class="header">
            <div class="container">
                <div class="header-content">
                    <div class="logo">
                        <A href="/">
                            <span class="logo-text">"FacialRecognition"</span>
                        </A>
                    </div>
                    <nav class="main-nav">
                        <Show when=logged_in>
                            <ul class="nav-list">
                                <li><A href="/events">"Events"</A></li>
                                <li><A href="/photos">"Photos"</A></li>
                                <li><A href="/people">"People"</A></li>
                            </ul>
                        </Show>
                    </nav>
                    <div class="user-actions">
                        <Show
                            when=logged_in
                            fallback=|| {
                                view! {
                                    <A href="/auth/login" attr:class="login-btn">"Login"</A>
                                    <A href="/auth/register" attr:class="register-btn">"Register"</A>
                                }
                            }
                        >
                            <div class="dropdown">
                                <button class="user-menu-btn" on:click=move |_| dropdown_open.update(|open| *open = !*open)>
                                    <span class="user-name">{username}</span>
                                    <span class="dropdown-icon">"▼"</span>
                                </button>
                                <div class="dropdown-menu" class:show=move || dropdown_open.get()>
                                    <A href="/profile">"My Profile"</A>
                                    <A href="/profile/settings">"Settings"</A>
                                    <a href="#" on:click=on_logout>"Logout"</a>
                                </div>
                            </div>
                        </Show>
                    </div>
                    <button class="mobile-menu-btn" on:click=move |_| mobile_open.update(|open| *open = !*open)>
                        <span class="mobile-menu-icon"></span>
                    </button>
                </div>
                <div class="mobile-nav" class:show=move || mobile_open.get()>
                    <Show
                        when=logged_in
                        fallback=|| {
                            view! {
                                <ul class="mobile-nav-list">
                                    <li><A href="/auth/login">"Login"</A></li>
                                    <li><A href="/auth/register">"Register"</A></li>
                                </ul>
                            }
                        }
                    >
                        <ul class="mobile-nav-list">
                            <li><A href="/events">"Events"</A></li>
                            <li><A href="/photos">"Photos"</A></li>
                            <li><A href="/people">"People"</A></li>
                            <li><A href="/profile">"My Profile"</A></li>
                            <li><A href="/profile/settings">"Settings"</A></li>
                            <li><a href="#" on:click=on_logout>"Logout"</a></li>
                        </ul>
                    </Show>
                </div>
            </div>
        </header>
    }
}
