//! Handlers for the `/sprogcentre` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use censur_core::error::CoreError;
use censur_db::models::sprogcenter::{CreateSprogcenter, Sprogcenter};
use censur_db::repositories::SprogcenterRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{EntityId, ValidatedJson};
use crate::state::AppState;

/// GET /api/sprogcentre
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Sprogcenter>>> {
    let sprogcentre = SprogcenterRepo::list(&state.pool).await?;
    Ok(Json(sprogcentre))
}

/// POST /api/sprogcentre
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateSprogcenter>,
) -> AppResult<(StatusCode, Json<Sprogcenter>)> {
    let sprogcenter = SprogcenterRepo::create(&state.pool, &input).await?;
    tracing::info!(sprogcenter_id = sprogcenter.id, "Created sprogcenter");
    Ok((StatusCode::CREATED, Json(sprogcenter)))
}

/// DELETE /api/sprogcentre/{id}
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<StatusCode> {
    let deleted = SprogcenterRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Sprogcenter",
            id,
        }))
    }
}
