//! Request extractors that reject with [`AppError`] instead of Axum's
//! plain-text rejections, so every 400 carries the JSON error body.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use censur_core::types::DbId;
use censur_core::validation::{validate_into, Schema};
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// The integer `{id}` segment of an entity route.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub DbId);

/// Parse a raw path segment as an entity identifier.
pub fn parse_id(raw: &str) -> AppResult<DbId> {
    raw.parse::<DbId>()
        .map_err(|_| AppError::BadRequest(format!("Invalid id format: '{raw}'")))
}

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        parse_id(&raw).map(EntityId)
    }
}

/// A JSON body that deserialized into schema `T` and passed its
/// validation rules, yielding the typed record.
pub struct ValidatedJson<T: Schema>(pub T::Record);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Schema + DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(validate_into(payload)?))
    }
}
