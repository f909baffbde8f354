//! Handlers for the `/tasks` listings.
//!
//! A "task" is any entry whose kind is not `note` (todo, event, holiday).
//! Both listings are scoped to the authenticated caller and order
//! incomplete entries before complete ones, then by weight priority.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use daybook_core::types::Day;
use daybook_db::models::note::NoteSearchParams;
use daybook_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /tasks?search=
///
/// Every task of the caller across all dates: incomplete first, then weight
/// high to low, then deadline ascending. Optional title search.
pub async fn list_tasks(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<NoteSearchParams>,
) -> AppResult<impl IntoResponse> {
    let tasks = NoteRepo::list_tasks(&state.pool, auth.user_id, params.search.as_deref()).await?;

    Ok(Json(DataResponse { data: tasks }))
}

/// GET /tasks/day/{date}?search=
///
/// The caller's tasks due on one day. `{date}` is ISO `YYYY-MM-DD`;
/// anything else is a 400.
pub async fn list_tasks_for_day(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(date): Path<String>,
    Query(params): Query<NoteSearchParams>,
) -> AppResult<impl IntoResponse> {
    let day: Day = date
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{date}'. Expected YYYY-MM-DD")))?;

    let tasks =
        NoteRepo::list_tasks_for_day(&state.pool, auth.user_id, day, params.search.as_deref())
            .await?;

    Ok(Json(DataResponse { data: tasks }))
}
