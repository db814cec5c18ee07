use validator::ValidationErrors;

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Field-level failures produced by a derived [`validator::Validate`] schema.
    #[error("Validation failed: {}", crate::validation::describe(.0))]
    InvalidInput(ValidationErrors),
}
