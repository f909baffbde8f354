//! Handlers for the `/notes` resource.
//!
//! Covers note CRUD, the complete/reopen toggles, and the journal listing.
//! Every operation is scoped to the authenticated caller: a note belonging
//! to someone else is indistinguishable from a missing one (404).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use daybook_core::error::CoreError;
use daybook_core::notes::{validate_description, validate_kind, validate_title, validate_weight};
use daybook_core::types::DbId;
use daybook_db::models::note::{CreateNote, NoteSearchParams, UpdateNote};
use daybook_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /notes?search=
///
/// List the caller's journal entries (kind `note`), newest first, optionally
/// filtered by a case-insensitive title substring.
pub async fn list_journal(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<NoteSearchParams>,
) -> AppResult<impl IntoResponse> {
    let notes = NoteRepo::list_journal(&state.pool, auth.user_id, params.search.as_deref()).await?;

    Ok(Json(DataResponse { data: notes }))
}

/// POST /notes
///
/// Create a new note owned by the caller. The owner always comes from the
/// access token, never from the body.
pub async fn create_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateNote>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(AppError::BadRequest)?;
    if let Some(ref description) = input.description {
        validate_description(description).map_err(AppError::BadRequest)?;
    }
    if let Some(ref kind) = input.kind {
        validate_kind(kind).map_err(AppError::BadRequest)?;
    }
    if let Some(ref weight) = input.weight {
        validate_weight(weight).map_err(AppError::BadRequest)?;
    }

    let note = NoteRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        note_id = note.id,
        kind = %note.kind,
        "Note created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}

/// GET /notes/{id}
///
/// Get one of the caller's notes by ID.
pub async fn get_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let note = NoteRepo::find_by_id_for_user(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Note", id }))?;

    Ok(Json(DataResponse { data: note }))
}

/// PUT /notes/{id}
///
/// Partially update one of the caller's notes. Owner and creation timestamp
/// never change.
pub async fn update_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNote>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_title(title).map_err(AppError::BadRequest)?;
    }
    if let Some(ref description) = input.description {
        validate_description(description).map_err(AppError::BadRequest)?;
    }
    if let Some(ref kind) = input.kind {
        validate_kind(kind).map_err(AppError::BadRequest)?;
    }
    if let Some(ref weight) = input.weight {
        validate_weight(weight).map_err(AppError::BadRequest)?;
    }

    let note = NoteRepo::update_for_user(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Note", id }))?;

    tracing::info!(user_id = auth.user_id, note_id = id, "Note updated");

    Ok(Json(DataResponse { data: note }))
}

/// DELETE /notes/{id}
///
/// Delete one of the caller's notes.
pub async fn delete_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = NoteRepo::delete_for_user(&state.pool, id, auth.user_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Note", id }));
    }

    tracing::info!(user_id = auth.user_id, note_id = id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /notes/{id}/complete
///
/// Mark one of the caller's notes complete.
pub async fn complete_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let note = NoteRepo::set_complete(&state.pool, id, auth.user_id, true)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Note", id }))?;

    tracing::info!(user_id = auth.user_id, note_id = id, "Note marked complete");

    Ok(Json(DataResponse { data: note }))
}

/// PATCH /notes/{id}/reopen
///
/// Mark one of the caller's notes incomplete again.
pub async fn reopen_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let note = NoteRepo::set_complete(&state.pool, id, auth.user_id, false)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Note", id }))?;

    tracing::info!(user_id = auth.user_id, note_id = id, "Note reopened");

    Ok(Json(DataResponse { data: note }))
}
