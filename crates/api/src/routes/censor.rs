//! Route definitions for the `/censorer` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::censor;
use crate::state::AppState;

/// Routes mounted at `/censorer`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(censor::list).post(censor::create))
        .route("/{id}", delete(censor::delete))
}
