//! Stand-in body for feature pages that have no content yet.

use leptos::prelude::*;

#[component]
pub fn Placeholder(title: &'static str, #[prop(into)] description: String) -> impl IntoView {
    view! {
        <div class="placeholder-page">
            <h2>{title}</h2>
            <p>{description}</p>
        </div>
    }
}
