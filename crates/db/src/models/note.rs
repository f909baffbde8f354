//! Note entity model and DTOs.
//!
//! A note with `kind = "note"` is a journal entry; every other kind is a
//! dated task that shows up in the task lists and on the weekly board.

use daybook_core::types::{Day, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    pub is_complete: bool,
    pub kind: String,
    pub weight: String,
    pub deadline: Day,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new note. Owner comes from the authenticated caller,
/// never from the body.
#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub title: String,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub weight: Option<String>,
    pub deadline: Option<Day>,
    pub is_complete: Option<bool>,
}

/// DTO for updating a note. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: Option<String>,
    pub weight: Option<String>,
    pub deadline: Option<Day>,
    pub is_complete: Option<bool>,
}

/// Query parameters for the listing endpoints.
#[derive(Debug, Deserialize)]
pub struct NoteSearchParams {
    /// Case-insensitive title substring filter.
    pub search: Option<String>,
}
