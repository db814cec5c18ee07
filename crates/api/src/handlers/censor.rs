//! Handlers for the `/censorer` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use censur_core::error::CoreError;
use censur_db::models::censor::{Censor, CreateCensor};
use censur_db::repositories::CensorRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{EntityId, ValidatedJson};
use crate::state::AppState;

/// GET /api/censorer
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Censor>>> {
    let censorer = CensorRepo::list(&state.pool).await?;
    Ok(Json(censorer))
}

/// POST /api/censorer
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCensor>,
) -> AppResult<(StatusCode, Json<Censor>)> {
    let censor = CensorRepo::create(&state.pool, &input).await?;
    tracing::info!(censor_id = censor.id, "Created censor");
    Ok((StatusCode::CREATED, Json(censor)))
}

/// DELETE /api/censorer/{id}
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<StatusCode> {
    let deleted = CensorRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(censor_id = id, "Deleted censor");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Censor",
            id,
        }))
    }
}
