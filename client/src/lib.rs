//! # client
//!
//! Leptos single-page frontend for the facerec photo service.
//!
//! Pages, layout chrome, and the browser adapters (`gloo-net` transport,
//! `localStorage` token store) live here. Session rules, the route guard,
//! and form validation come from the `auth` crate so they can be tested
//! natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
