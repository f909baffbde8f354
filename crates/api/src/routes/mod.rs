pub mod auth;
pub mod dashboard;
pub mod health;
pub mod notes;
pub mod profile;
pub mod tasks;
pub mod weather;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
/// /auth/refresh                  refresh (public)
/// /auth/logout                   logout (requires auth)
///
/// /notes                         journal list, create (requires auth)
/// /notes/{id}                    get, update, delete
/// /notes/{id}/complete           mark complete (PATCH)
/// /notes/{id}/reopen             mark incomplete (PATCH)
///
/// /tasks                         all tasks across dates (GET)
/// /tasks/day/{date}              tasks due on one day (GET)
///
/// /dashboard/week                weekly board (?offset=) (GET)
///
/// /profile                       combined user + profile (GET, PUT)
///
/// /weather                       current conditions (?city=) (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, refresh, logout).
        .nest("/auth", auth::router())
        // Note CRUD and the journal listing.
        .nest("/notes", notes::router())
        // Task listings (all dates, single day).
        .nest("/tasks", tasks::router())
        // Weekly board.
        .nest("/dashboard", dashboard::router())
        // Combined user + profile document.
        .nest("/profile", profile::router())
        // Current weather conditions.
        .nest("/weather", weather::router())
}
