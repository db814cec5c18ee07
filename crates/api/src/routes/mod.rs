pub mod censor;
pub mod health;
pub mod hold;
pub mod organisation;
pub mod sprogcenter;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /censorer                      list, create
/// /censorer/{id}                 delete
///
/// /organisationer                list ({id, navn} only), create
/// /organisationer/{id}           delete
///
/// /sprogcentre                   list, create
/// /sprogcentre/{id}              delete
///
/// /hold                          list (?termin=), create
/// /hold/{id}                     delete
/// /hold/{id}/togglelock          flip the locked flag (PATCH)
///
/// /terminer                      distinct term labels, newest first
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/censorer", censor::router())
        .nest("/organisationer", organisation::router())
        .nest("/sprogcentre", sprogcenter::router())
        .nest("/hold", hold::router())
        .route("/terminer", get(handlers::hold::list_terms))
}
