//! Login page: username/password sign-in.

use auth::forms::{Field, FieldErrors, LoginForm, SubmitState};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{FormField, field_binding, field_error};
use crate::state::auth::AuthState;
use crate::util::auth::{follow_pending, install_redirect, signed_in_redirect};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let form = RwSignal::new(LoginForm::default());
    let submit = RwSignal::new(SubmitState::default());
    let pending = RwSignal::new(None::<&'static str>);
    let errors = Memo::new(move |_| form.with(|f| f.validate().err().unwrap_or_default()));

    install_redirect(auth, signed_in_redirect, use_navigate());
    follow_pending(pending, use_navigate());

    let (username, set_username) = field_binding(form, |f| &f.username, |f| &mut f.username);
    let (password, set_password) = field_binding(form, |f| &f.password, |f| &mut f.password);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !submit.try_update(SubmitState::attempt).unwrap_or(false) {
            return;
        }
        if !errors.with_untracked(FieldErrors::is_empty) {
            return;
        }
        let current = form.get_untracked();
        submit.update(SubmitState::start);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::state::session::gateway().submit_login(&current).await {
                Ok(_) => {
                    submit.update(|s| s.succeed(None));
                    pending.set(Some("/"));
                }
                Err(err) => submit.update(|s| s.fail(err.user_message())),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = current;
    };

    view! {
        <div class="login-container">
            <div class="login-card">
                <h2>"Login"</h2>
                <Show when=move || submit.with(|s| s.error.is_some())>
                    <div class="error-message">{move || submit.with(|s| s.error.clone().unwrap_or_default())}</div>
                </Show>
                <form on:submit=on_submit>
                    <FormField
                        id="username"
                        label="Email or Username"
                        value=username
                        on_input=set_username
                        error=field_error(submit, errors, Field::Username)
                    />
                    <FormField
                        id="password"
                        label="Password"
                        input_type="password"
                        value=password
                        on_input=set_password
                        error=field_error(submit, errors, Field::Password)
                    />
                    <div class="form-group">
                        <button type="submit" class="btn btn-primary login-btn" disabled=move || submit.with(|s| s.busy)>
                            <Show when=move || submit.with(|s| s.busy)>
                                <span class="spinner-border spinner-border-sm mr-1"></span>
                            </Show>
                            "Login"
                        </button>
                    </div>
                    <div class="register-link">
                        "Don't have an account? "
                        <A href="/auth/register">"Register"</A>
                    </div>
                </form>
            </div>
        </div>
    }
}
