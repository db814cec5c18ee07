//! Repository for the `sprogcenter` table.

use sqlx::PgPool;
use censur_core::types::DbId;

use crate::models::sprogcenter::{NewSprogcenter, Sprogcenter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, navn, adresse, postnummer, forstad, telefon, email, \
    institutionsnummer, organisations_id, driftsaftaleperiode, tilsynskommune, \
    udbyder_pd1, udbyder_pd2, udbyder_pd3, udbyder_sp, udbyder_vp, created_at";

/// Provides list/create/delete operations for language centres.
pub struct SprogcenterRepo;

impl SprogcenterRepo {
    /// List all language centres ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Sprogcenter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sprogcenter ORDER BY id ASC");
        sqlx::query_as::<_, Sprogcenter>(&query).fetch_all(pool).await
    }

    /// Insert a new language centre, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewSprogcenter,
    ) -> Result<Sprogcenter, sqlx::Error> {
        let query = format!(
            "INSERT INTO sprogcenter (
                navn, adresse, postnummer, forstad, telefon, email, institutionsnummer,
                organisations_id, driftsaftaleperiode, tilsynskommune,
                udbyder_pd1, udbyder_pd2, udbyder_pd3, udbyder_sp, udbyder_vp
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sprogcenter>(&query)
            .bind(&input.navn)
            .bind(&input.adresse)
            .bind(&input.postnummer)
            .bind(&input.forstad)
            .bind(&input.telefon)
            .bind(&input.email)
            .bind(&input.institutionsnummer)
            .bind(input.organisations_id)
            .bind(&input.driftsaftaleperiode)
            .bind(&input.tilsynskommune)
            .bind(input.udbyder_pd1)
            .bind(input.udbyder_pd2)
            .bind(input.udbyder_pd3)
            .bind(input.udbyder_sp)
            .bind(input.udbyder_vp)
            .fetch_one(pool)
            .await
    }

    /// Permanently delete a language centre by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sprogcenter WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
