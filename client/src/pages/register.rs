//! Registration page.
//!
//! On success the page shows a confirmation, then moves to the login page
//! after [`LOGIN_REDIRECT_DELAY_MS`]. Registration never signs the user in.

use auth::forms::{Field, FieldErrors, RegisterForm, SubmitState};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{FormField, field_binding, field_error};
use crate::state::auth::AuthState;
use crate::util::auth::{follow_pending, install_redirect, signed_in_redirect};

pub const REGISTER_SUCCESS: &str = "Registration successful! You can now log in.";
pub const LOGIN_REDIRECT_DELAY_MS: u32 = 2_000;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let form = RwSignal::new(RegisterForm::default());
    let submit = RwSignal::new(SubmitState::default());
    let pending = RwSignal::new(None::<&'static str>);
    let errors = Memo::new(move |_| form.with(|f| f.validate().err().unwrap_or_default()));

    install_redirect(auth, signed_in_redirect, use_navigate());
    follow_pending(pending, use_navigate());

    let (username, set_username) = field_binding(form, |f| &f.username, |f| &mut f.username);
    let (email, set_email) = field_binding(form, |f| &f.email, |f| &mut f.email);
    let (first_name, set_first_name) = field_binding(form, |f| &f.first_name, |f| &mut f.first_name);
    let (last_name, set_last_name) = field_binding(form, |f| &f.last_name, |f| &mut f.last_name);
    let (password, set_password) = field_binding(form, |f| &f.password, |f| &mut f.password);
    let (confirm, set_confirm) = field_binding(form, |f| &f.confirm_password, |f| &mut f.confirm_password);

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
            match crate::state::session::gateway().submit_registration(&current).await {
                Ok(()) => {
                    submit.update(|s| s.succeed(Some(REGISTER_SUCCESS.to_owned())));
                    gloo_timers::future::TimeoutFuture::new(LOGIN_REDIRECT_DELAY_MS).await;
                    pending.set(Some(auth::guard::LOGIN_ROUTE));
                }
                Err(err) => submit.update(|s| s.fail(err.user_message())),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = current;
    };

    view! {
        <div class="register-container">
            <div class="register-card">
                <h2>"Create Account"</h2>
                <Show when=move || submit.with(|s| s.error.is_some())>
                    <div class="error-message">{move || submit.with(|s| s.error.clone().unwrap_or_default())}</div>
                </Show>
                <Show when=move || submit.with(|s| s.success.is_some())>
                    <div class="success-message">{move || submit.with(|s| s.success.clone().unwrap_or_default())}</div>
                </Show>
                <form on:submit=on_submit>
                    <FormField
                        id="username"
                        label="Username"
                        value=username
                        on_input=set_username
                        error=field_error(submit, errors, Field::Username)
                    />
                    <FormField
                        id="email"
                        label="Email"
                        input_type="email"
                        value=email
                        on_input=set_email
                        error=field_error(submit, errors, Field::Email)
                    />
                    <div class="form-row">
                        <FormField
                            id="firstName"
                            label="First Name"
                            value=first_name
                            on_input=set_first_name
                            error=field_error(submit, errors, Field::FirstName)
                        />
                        <FormField
                            id="lastName"
                            label="Last Name"
                            value=last_name
                            on_input=set_last_name
                            error=field_error(submit, errors, Field::LastName)
                        />
                    </div>
                    <FormField
                        id="password"
                        label="Password"
                        input_type="password"
                        value=password
                        on_input=set_password
                        error=field_error(submit, errors, Field::Password)
                    />
                    <FormField
                        id="confirmPassword"
                        label="Confirm Password"
                        input_type="password"
                        value=confirm
                        on_input=set_confirm
                        error=field_error(submit, errors, Field::ConfirmPassword)
                    />
                    <div class="form-group">
                        <button type="submit" class="btn btn-primary register-btn" disabled=move || submit.with(|s| s.busy)>
                            <Show when=move || submit.with(|s| s.busy)>
                                <span class="spinner-border spinner-border-sm mr-1"></span>
                            </Show>
                            "Register"
                        </button>
                    </div>
                    <div class="login-link">
                        "Already have an account? "
                        <A href="/auth/login">"Login"</A>
                    </div>
                </form>
            </div>
        </div>
    }
}
