//! People pages. Content is not built yet; each route renders a placeholder.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::placeholder::Placeholder;

#[component]
pub fn PeopleListPage() -> impl IntoView {
    view! { <Placeholder title="People" description="This page will list all people detected in photos (placeholder)"/> }
}

#[component]
pub fn PersonDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();
    view! {
        <Placeholder title="Person Details" description="This page will show details for a specific person (placeholder)"/>
        <p class="placeholder-ref">"Person #" {id}</p>
    }
}
