//! Repository for the `notes` table.

use chrono::Utc;
use daybook_core::notes::{DEFAULT_KIND, DEFAULT_WEIGHT, KIND_NOTE};
use daybook_core::types::{Day, DbId};
use sqlx::PgPool;

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, title, description, is_complete, kind, weight, \
                        deadline, created_at, updated_at";

/// Priority ordering for the `weight` column: high, then normal, then low.
const WEIGHT_ORDER: &str = "CASE weight WHEN 'high' THEN 0 WHEN 'normal' THEN 1 ELSE 2 END";

/// Build a `%term%` ILIKE pattern, escaping LIKE metacharacters so the
/// search term matches literally. A title containing `50%` or `a_c` must
/// match exactly those characters, not act as a wildcard.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note owned by `user_id`, returning the created row.
    ///
    /// Absent optional fields fall back to their defaults: kind `todo`,
    /// weight `normal`, deadline today (UTC), empty description, incomplete.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateNote,
    ) -> Result<Note, sqlx::Error> {
        let description = input.description.as_deref().unwrap_or("");
        let kind = input.kind.as_deref().unwrap_or(DEFAULT_KIND);
        let weight = input.weight.as_deref().unwrap_or(DEFAULT_WEIGHT);
        let deadline = input.deadline.unwrap_or_else(|| Utc::now().date_naive());
        let is_complete = input.is_complete.unwrap_or(false);

        let query = format!(
            "INSERT INTO notes (user_id, title, description, is_complete, kind, weight, deadline)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(description)
            .bind(is_complete)
            .bind(kind)
            .bind(weight)
            .bind(deadline)
            .fetch_one(pool)
            .await
    }

    /// Find a note by ID, scoped to its owner.
    ///
    /// Another user's note comes back as `None`, same as a missing one.
    pub async fn find_by_id_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a note, scoped to its owner. Only non-`None` fields in `input`
    /// are applied; `user_id` and `created_at` never change.
    ///
    /// Returns `None` if the note does not exist or belongs to someone else.
    pub async fn update_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                is_complete = COALESCE($5, is_complete),
                kind = COALESCE($6, kind),
                weight = COALESCE($7, weight),
                deadline = COALESCE($8, deadline),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.is_complete)
            .bind(&input.kind)
            .bind(&input.weight)
            .bind(input.deadline)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note, scoped to its owner. Returns `true` if a row was deleted.
    pub async fn delete_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set the completion flag, scoped to the owner. Returns the updated row.
    pub async fn set_complete(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        is_complete: bool,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET is_complete = $3, updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(user_id)
            .bind(is_complete)
            .fetch_optional(pool)
            .await
    }

    /// List journal entries (kind `note`) for a user, newest first.
    /// `search` filters by case-insensitive title substring.
    pub async fn list_journal(
        pool: &PgPool,
        user_id: DbId,
        search: Option<&str>,
    ) -> Result<Vec<Note>, sqlx::Error> {
        if let Some(term) = search {
            let pattern = like_pattern(term);
            let query = format!(
                "SELECT {COLUMNS} FROM notes
                 WHERE user_id = $1 AND kind = '{KIND_NOTE}' AND title ILIKE $2 ESCAPE '\\'
                 ORDER BY created_at DESC, id DESC"
            );
            sqlx::query_as::<_, Note>(&query)
                .bind(user_id)
                .bind(&pattern)
                .fetch_all(pool)
                .await
        } else {
            let query = format!(
                "SELECT {COLUMNS} FROM notes
                 WHERE user_id = $1 AND kind = '{KIND_NOTE}'
                 ORDER BY created_at DESC, id DESC"
            );
            sqlx::query_as::<_, Note>(&query)
                .bind(user_id)
                .fetch_all(pool)
                .await
        }
    }

    /// List every task (kind other than `note`) for a user across all dates:
    /// incomplete first, then weight priority, then deadline, then ID.
    pub async fn list_tasks(
        pool: &PgPool,
        user_id: DbId,
        search: Option<&str>,
    ) -> Result<Vec<Note>, sqlx::Error> {
        if let Some(term) = search {
            let pattern = like_pattern(term);
            let query = format!(
                "SELECT {COLUMNS} FROM notes
                 WHERE user_id = $1 AND kind <> '{KIND_NOTE}' AND title ILIKE $2 ESCAPE '\\'
                 ORDER BY is_complete, {WEIGHT_ORDER}, deadline, id"
            );
            sqlx::query_as::<_, Note>(&query)
                .bind(user_id)
                .bind(&pattern)
                .fetch_all(pool)
                .await
        } else {
            let query = format!(
                "SELECT {COLUMNS} FROM notes
                 WHERE user_id = $1 AND kind <> '{KIND_NOTE}'
                 ORDER BY is_complete, {WEIGHT_ORDER}, deadline, id"
            );
            sqlx::query_as::<_, Note>(&query)
                .bind(user_id)
                .fetch_all(pool)
                .await
        }
    }

    /// List a user's tasks with a deadline on the given day:
    /// incomplete first, then weight priority, then ID.
    pub async fn list_tasks_for_day(
        pool: &PgPool,
        user_id: DbId,
        day: Day,
        search: Option<&str>,
    ) -> Result<Vec<Note>, sqlx::Error> {
        if let Some(term) = search {
            let pattern = like_pattern(term);
            let query = format!(
                "SELECT {COLUMNS} FROM notes
                 WHERE user_id = $1 AND kind <> '{KIND_NOTE}' AND deadline = $2
                   AND title ILIKE $3 ESCAPE '\\'
                 ORDER BY is_complete, {WEIGHT_ORDER}, id"
            );
            sqlx::query_as::<_, Note>(&query)
                .bind(user_id)
                .bind(day)
                .bind(&pattern)
                .fetch_all(pool)
                .await
        } else {
            let query = format!(
                "SELECT {COLUMNS} FROM notes
                 WHERE user_id = $1 AND kind <> '{KIND_NOTE}' AND deadline = $2
                 ORDER BY is_complete, {WEIGHT_ORDER}, id"
            );
            sqlx::query_as::<_, Note>(&query)
                .bind(user_id)
                .bind(day)
                .fetch_all(pool)
                .await
        }
    }

    /// List a user's incomplete tasks with deadlines inside `[start, end]`,
    /// ordered by deadline, then weight priority, then ID. Feeds the weekly
    /// board, which groups the rows by day.
    pub async fn list_open_tasks_between(
        pool: &PgPool,
        user_id: DbId,
        start: Day,
        end: Day,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE user_id = $1 AND kind <> '{KIND_NOTE}' AND is_complete = FALSE
               AND deadline BETWEEN $2 AND $3
             ORDER BY deadline, {WEIGHT_ORDER}, id"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(user_id)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }
}
