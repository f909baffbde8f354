//! Profile entity model and DTOs.

use daybook_core::types::{Day, DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A profile row from the `profiles` table (one-to-one with `users`).
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub user_id: DbId,
    pub birth_date: Option<Day>,
    pub location: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating profile fields. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub birth_date: Option<Day>,
    pub location: Option<String>,
}
