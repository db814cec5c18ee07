//! Handlers for the `/organisationer` resource.
//!
//! The listing deliberately returns only `{id, navn}` pairs.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use censur_core::error::CoreError;
use censur_db::models::organisation::{CreateOrganisation, Organisation, OrganisationSummary};
use censur_db::repositories::OrganisationRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{EntityId, ValidatedJson};
use crate::state::AppState;

/// GET /api/organisationer
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<OrganisationSummary>>> {
    let organisationer = OrganisationRepo::list(&state.pool).await?;
    Ok(Json(organisationer))
}

/// POST /api/organisationer
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateOrganisation>,
) -> AppResult<(StatusCode, Json<Organisation>)> {
    let organisation = OrganisationRepo::create(&state.pool, &input).await?;
    tracing::info!(organisation_id = organisation.id, "Created organisation");
    Ok((StatusCode::CREATED, Json(organisation)))
}

/// DELETE /api/organisationer/{id}
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<StatusCode> {
    if OrganisationRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Organisation",
            id,
        }))
    }
}
