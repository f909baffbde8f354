//! Route definitions for the weekly dashboard.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET /week   -> week_board (?offset)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/week", get(dashboard::week_board))
}
