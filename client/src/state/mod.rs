//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is the reactive view of the signed-in user that components read;
//! `session` owns the gateway that is the only writer of that state.

pub mod auth;
pub mod session;
