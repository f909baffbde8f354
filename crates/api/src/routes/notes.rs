//! Route definitions for the `/notes` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Routes mounted at `/notes`.
///
/// ```text
/// GET    /               -> list_journal (?search)
/// POST   /               -> create_note
/// GET    /{id}           -> get_note
/// PUT    /{id}           -> update_note
/// DELETE /{id}           -> delete_note
/// PATCH  /{id}/complete  -> complete_note
/// PATCH  /{id}/reopen    -> reopen_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list_journal).post(notes::create_note))
        .route(
            "/{id}",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
        .route("/{id}/complete", patch(notes::complete_note))
        .route("/{id}/reopen", patch(notes::reopen_note))
}
