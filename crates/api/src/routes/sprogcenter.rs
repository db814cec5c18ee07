//! Route definitions for the `/sprogcentre` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::sprogcenter;
use crate::state::AppState;

/// Routes mounted at `/sprogcentre`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sprogcenter::list).post(sprogcenter::create))
        .route("/{id}", delete(sprogcenter::delete))
}
