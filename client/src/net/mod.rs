//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` adapts `gloo-net` to the `auth` crate's transport seam; request
//! shapes and status handling live in `auth`.

pub mod api;
