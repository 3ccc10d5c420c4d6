//! Labeled input with an inline validation message.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth forms keep their values in one `RwSignal<Form>` and derive field
//! errors from `validate()`. Errors stay hidden until the first submit.

use auth::forms::{Field, FieldErrors, SubmitState};
use leptos::prelude::*;

/// Read/write pair for one string field of a form signal.
pub fn field_binding<F>(
    form: RwSignal<F>,
    get: fn(&F) -> &String,
    set: fn(&mut F) -> &mut String,
) -> (Signal<String>, Callback<String>)
where
    F: Send + Sync + 'static,
{
    let value = Signal::derive(move || form.with(|f| get(f).clone()));
    let on_input = Callback::new(move |next: String| form.update(|f| *set(f) = next));
    (value, on_input)
}

/// Inline error for `field`, shown only after the form has been submitted.
pub fn field_error(submit: RwSignal<SubmitState>, errors: Memo<FieldErrors>, field: Field) -> Signal<Option<String>> {
    Signal::derive(move || {
        if submit.with(SubmitState::show_errors) {
            errors.with(|e| e.message(field))
        } else {
            None
        }
    })
}

#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                type=input_type
                class="form-control"
                class:is-invalid=move || error.with(Option::is_some)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || error.with(Option::is_some)>
                <div class="invalid-feedback">{move || error.get().unwrap_or_default()}</div>
            </Show>
        </div>
    }
}
