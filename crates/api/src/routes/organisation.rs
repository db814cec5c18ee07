//! Route definitions for the `/organisationer` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::organisation;
use crate::state::AppState;

/// Routes mounted at `/organisationer`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(organisation::list).post(organisation::create))
        .route("/{id}", delete(organisation::delete))
}
