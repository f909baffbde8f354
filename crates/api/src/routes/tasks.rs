//! Route definitions for the `/tasks` listings.

use axum::routing::get;
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET /             -> list_tasks (?search)
/// GET /day/{date}   -> list_tasks_for_day (?search)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::list_tasks))
        .route("/day/{date}", get(tasks::list_tasks_for_day))
}
