//! Photo pages. Content is not built yet; each route renders a placeholder.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::placeholder::Placeholder;

#[component]
pub fn PhotoListPage() -> impl IntoView {
    view! { <Placeholder title="Photos" description="This page will list all photos (placeholder)"/> }
}

#[component]
pub fn PhotoUploadPage() -> impl IntoView {
    view! { <Placeholder title="Upload Photos" description="This page will allow uploading photos (placeholder)"/> }
}

#[component]
pub fn PhotoDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();
    view! {
        <Placeholder title="Photo Details" description="This page will show photo details (placeholder)"/>
        <p class="placeholder-ref">"Photo #" {id}</p>
    }
}
