//! Domain logic shared by the daybook crates.
//!
//! Pure types and functions only -- no I/O, no database, no HTTP. The
//! `db` and `api` crates build on the validation rules and calendar
//! arithmetic defined here.

pub mod error;
pub mod notes;
pub mod types;
pub mod users;
pub mod week;
