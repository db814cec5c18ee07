//! Route definitions for the `/hold` resource.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::hold;
use crate::state::AppState;

/// Routes mounted at `/hold`.
///
/// ```text
/// GET    /                  -> list (optional ?termin=)
/// POST   /                  -> create
/// DELETE /{id}              -> delete
/// PATCH  /{id}/togglelock   -> toggle_lock
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(hold::list).post(hold::create))
        .route("/{id}", delete(hold::delete))
        .route("/{id}/togglelock", patch(hold::toggle_lock))
}
