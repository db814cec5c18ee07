//! Handlers for the `/hold` resource and the `/terminer` term listing.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use censur_core::error::CoreError;
use censur_core::types::DbId;
use censur_db::models::hold::{CreateHold, HoldWithNames, NewHold};
use censur_db::repositories::HoldRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{EntityId, ValidatedJson};
use crate::query::TerminParams;
use crate::state::AppState;

/// GET /api/hold?termin=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TerminParams>,
) -> AppResult<Json<Vec<HoldWithNames>>> {
    let hold = HoldRepo::list(&state.pool, params.filter()).await?;
    Ok(Json(hold))
}

/// POST /api/hold
///
/// A reference to a missing language centre or censor is the caller's
/// mistake, so the foreign-key violation is answered with 400.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateHold>,
) -> AppResult<(StatusCode, Json<HoldWithNames>)> {
    let hold = HoldRepo::create(&state.pool, &input)
        .await
        .map_err(|err| create_error(err, &input))?;
    tracing::info!(hold_id = hold.id, termin = %hold.termin, "Created hold");
    Ok((StatusCode::CREATED, Json(hold)))
}

/// DELETE /api/hold/{id}
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<StatusCode> {
    let deleted = HoldRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(hold_id = id, "Deleted hold");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// PATCH /api/hold/{id}/togglelock
pub async fn toggle_lock(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<HoldWithNames>> {
    let hold = HoldRepo::toggle_lock(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(hold))
}

/// GET /api/terminer
pub async fn list_terms(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let terminer = HoldRepo::list_terms(&state.pool).await?;
    Ok(Json(terminer))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Hold", id })
}

fn create_error(err: sqlx::Error, input: &NewHold) -> AppError {
    let message = censur_db::foreign_key_violation(&err)
        .map(|constraint| unresolved_reference_message(constraint, input));
    match message {
        Some(message) => AppError::BadRequest(message),
        None => AppError::Database(err),
    }
}

/// Name the reference that did not resolve, falling back to both when the
/// constraint is not one of the hold's own.
fn unresolved_reference_message(constraint: &str, input: &NewHold) -> String {
    match constraint {
        "fk_hold_sprogcenter" => format!(
            "Could not create hold: sprogcenter_id ({}) does not exist",
            display_ref(input.sprogcenter_id)
        ),
        "fk_hold_censor" => format!(
            "Could not create hold: censorer_id ({}) does not exist",
            display_ref(input.censorer_id)
        ),
        _ => format!(
            "Could not create hold: check that sprogcenter_id ({}) and censorer_id ({}) exist",
            display_ref(input.sprogcenter_id),
            display_ref(input.censorer_id)
        ),
    }
}

fn display_ref(id: Option<DbId>) -> String {
    id.map_or_else(|| "null".to_string(), |id| id.to_string())
}
