//! Profile pages: account details, profile edit, and password settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! All three routes sit behind `RequireAuth`, so a user is present when they
//! render. Edits go through the shared gateway, which republishes the session
//! and thereby refreshes the header and this page.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use auth::forms::{Field, FieldErrors, PasswordChangeForm, ProfileForm, SubmitState};
use auth::{Subscription, User};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::form_field::{FormField, field_binding, field_error};
use crate::state::auth::AuthState;

pub const PROFILE_UPDATED: &str = "Profile updated.";
pub const PASSWORD_CHANGED: &str = "Password changed successfully.";

/// Edit form seeded with the user's current values.
fn prefill(user: &User) -> ProfileForm {
    ProfileForm {
        first_name: user.first_name.clone().unwrap_or_default(),
        last_name: user.last_name.clone().unwrap_or_default(),
        email: user.email.clone(),
    }
}

fn subscription_summary(subscription: Option<&Subscription>) -> String {
    match subscription {
        None => "No active subscription".to_owned(),
        Some(sub) if sub.is_active => format!("{} (active until {})", sub.package_name, sub.end_date),
        Some(sub) => format!("{} (expired {})", sub.package_name, sub.end_date),
    }
}

/// "Member since" date from the server timestamp.
fn member_since(created_at: &str) -> &str {
    created_at.split('T').next().unwrap_or(created_at)
}

#[component]
pub fn ProfileDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let subscription = RwSignal::new(None::<Result<Option<Subscription>, String>>);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = crate::state::session::gateway()
            .subscription()
            .await
            .map_err(|err| err.user_message());
        subscription.set(Some(result));
    });

    let field = move |read: fn(&User) -> String| auth.with(|a| a.user.as_ref().map(read).unwrap_or_default());

    view! {
        <div class="profile-page">
            <h2>"Profile"</h2>
            <dl class="profile-details">
                <dt>"Name"</dt>
                <dd>{move || auth.with(AuthState::display_name)}</dd>
                <dt>"Username"</dt>
                <dd>{move || field(|u| u.username.clone())}</dd>
                <dt>"Email"</dt>
                <dd>{move || field(|u| u.email.clone())}</dd>
                <dt>"Member since"</dt>
                <dd>{move || field(|u| member_since(&u.created_at).to_owned())}</dd>
                <dt>"Subscription"</dt>
                <dd>
                    {move || match subscription.get() {
                        None => "Loading...".to_owned(),
                        Some(Ok(sub)) => subscription_summary(sub.as_ref()),
                        Some(Err(message)) => message,
                    }}
                </dd>
            </dl>
            <div class="profile-actions">
                <A href="/profile/edit" attr:class="btn btn-primary">"Edit Profile"</A>
                <A href="/profile/settings" attr:class="btn btn-outline">"Settings"</A>
            </div>
        </div>
    }
}

#[component]
pub fn ProfileEditPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let initial = auth.with_untracked(|a| a.user.as_ref().map(prefill).unwrap_or_default());
    let form = RwSignal::new(initial);
    let submit = RwSignal::new(SubmitState::default());
    let errors = Memo::new(move |_| form.with(|f| f.validate().err().unwrap_or_default()));

    let (first_name, set_first_name) = field_binding(form, |f| &f.first_name, |f| &mut f.first_name);
    let (last_name, set_last_name) = field_binding(form, |f| &f.last_name, |f| &mut f.last_name);
    let (email, set_email) = field_binding(form, |f| &f.email, |f| &mut f.email);

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
            match crate::state::session::gateway().submit_profile(&current).await {
                Ok(session) => {
                    form.set(prefill(&session.user));
                    submit.update(|s| s.succeed(Some(PROFILE_UPDATED.to_owned())));
                }
                Err(err) => submit.update(|s| s.fail(err.user_message())),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = current;
    };

    view! {
        <div class="profile-page">
            <h2>"Edit Profile"</h2>
            <FormMessages submit=submit/>
            <form on:submit=on_submit>
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
                <FormField
                    id="email"
                    label="Email"
                    input_type="email"
                    value=email
                    on_input=set_email
                    error=field_error(submit, errors, Field::Email)
                />
                <button type="submit" class="btn btn-primary" disabled=move || submit.with(|s| s.busy)>
                    "Save"
                </button>
            </form>
        </div>
    }
}

#[component]
pub fn ProfileSettingsPage() -> impl IntoView {
    let form = RwSignal::new(PasswordChangeForm::default());
    let submit = RwSignal::new(SubmitState::default());
    let errors = Memo::new(move |_| form.with(|f| f.validate().err().unwrap_or_default()));

    let (current_password, set_current_password) =
        field_binding(form, |f| &f.current_password, |f| &mut f.current_password);
    let (new_password, set_new_password) = field_binding(form, |f| &f.new_password, |f| &mut f.new_password);
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
            match crate::state::session::gateway().submit_password_change(&current).await {
                Ok(()) => {
                    form.set(PasswordChangeForm::default());
                    submit.update(|s| {
                        s.submitted = false;
                        s.succeed(Some(PASSWORD_CHANGED.to_owned()));
                    });
                }
                Err(err) => submit.update(|s| s.fail(err.user_message())),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = current;
    };

    view! {
        <div class="profile-page">
            <h2>"Settings"</h2>
            <h3>"Change Password"</h3>
            <FormMessages submit=submit/>
            <form on:submit=on_submit>
                <FormField
                    id="currentPassword"
                    label="Current Password"
                    input_type="password"
                    value=current_password
                    on_input=set_current_password
                    error=field_error(submit, errors, Field::CurrentPassword)
                />
                <FormField
                    id="newPassword"
                    label="New Password"
                    input_type="password"
                    value=new_password
                    on_input=set_new_password
                    error=field_error(submit, errors, Field::NewPassword)
                />
                <FormField
                    id="confirmPassword"
                    label="Confirm Password"
                    input_type="password"
                    value=confirm
                    on_input=set_confirm
                    error=field_error(submit, errors, Field::ConfirmPassword)
                />
                <button type="submit" class="btn btn-primary" disabled=move || submit.with(|s| s.busy)>
                    "Change Password"
                </button>
            </form>
        </div>
    }
}

#[component]
fn FormMessages(submit: RwSignal<SubmitState>) -> impl IntoView {
    view! {
        <Show when=move || submit.with(|s| s.error.is_some())>
            <div class="error-message">{move || submit.with(|s| s.error.clone().unwrap_or_default())}</div>
        </Show>
        <Show when=move || submit.with(|s| s.success.is_some())>
            <div class="success-message">{move || submit.with(|s| s.success.clone().unwrap_or_default())}</div>
        </Show>
    }
}
