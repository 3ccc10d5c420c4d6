//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and form controls while reading the
//! shared `AuthState` from Leptos context.

pub mod footer;
pub mod form_field;
pub mod header;
pub mod placeholder;
pub mod require_auth;
