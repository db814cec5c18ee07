//! Repository for the `organisationer` table.

use sqlx::PgPool;
use censur_core::types::DbId;

use crate::models::organisation::{NewOrganisation, Organisation, OrganisationSummary};

/// Provides list/create/delete operations for organisations.
pub struct OrganisationRepo;

impl OrganisationRepo {
    /// List every organisation as an `{id, navn}` pair, ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<OrganisationSummary>, sqlx::Error> {
        sqlx::query_as::<_, OrganisationSummary>(
            "SELECT id, navn FROM organisationer ORDER BY id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Insert a new organisation, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewOrganisation,
    ) -> Result<Organisation, sqlx::Error> {
        sqlx::query_as::<_, Organisation>(
            "INSERT INTO organisationer (navn) VALUES ($1) RETURNING id, navn, created_at",
        )
        .bind(&input.navn)
        .fetch_one(pool)
        .await
    }

    /// Permanently delete an organisation by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM organisationer WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
