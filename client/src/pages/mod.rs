//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Session-changing pages call the shared gateway from
//! `state::session`.

pub mod events;
pub mod home;
pub mod login;
pub mod people;
pub mod photos;
pub mod profile;
pub mod register;
