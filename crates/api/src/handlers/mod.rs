//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input with `daybook_core`, delegate to the
//! repositories in `daybook_db`, and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod dashboard;
pub mod notes;
pub mod profile;
pub mod tasks;
pub mod weather;
