//! Event pages. Content is not built yet; each route renders a placeholder.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::placeholder::Placeholder;

#[component]
pub fn EventListPage() -> impl IntoView {
    view! { <Placeholder title="Events" description="This page will list all events (placeholder)"/> }
}

#[component]
pub fn EventCreatePage() -> impl IntoView {
    view! { <Placeholder title="Create Event" description="This page will allow creation of events (placeholder)"/> }
}

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();
    view! {
        <Placeholder title="Event Details" description="This page will show event details (placeholder)"/>
        <p class="placeholder-ref">"Event #" {id}</p>
    }
}

#[component]
pub fn EventEditPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();
    view! {
        <Placeholder title="Edit Event" description="This page will allow editing an event (placeholder)"/>
        <p class="placeholder-ref">"Event #" {id}</p>
    }
}
