//! Repository for the `censorer` table.

use sqlx::PgPool;
use censur_core::types::DbId;

use crate::models::censor::{Censor, NewCensor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, fornavn, efternavn, adresse, postnummer, forstad, telefon, email, \
    cpr_nummer, beskikket_til, beskikket_indfodsret, beskikket_medborgerskab, \
    arbejds_status, prioritet, sprogcenter_id, kommentar, created_at";

/// Provides list/create/delete operations for censors.
pub struct CensorRepo;

impl CensorRepo {
    /// List all censors ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Censor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM censorer ORDER BY id ASC");
        sqlx::query_as::<_, Censor>(&query).fetch_all(pool).await
    }

    /// Insert a new censor, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewCensor) -> Result<Censor, sqlx::Error> {
        let query = format!(
            "INSERT INTO censorer (
                fornavn, efternavn, adresse, postnummer, forstad, telefon, email,
                cpr_nummer, beskikket_til, beskikket_indfodsret, beskikket_medborgerskab,
                arbejds_status, prioritet, sprogcenter_id, kommentar
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Censor>(&query)
            .bind(&input.fornavn)
            .bind(&input.efternavn)
            .bind(&input.adresse)
            .bind(&input.postnummer)
            .bind(&input.forstad)
            .bind(&input.telefon)
            .bind(&input.email)
            .bind(&input.cpr_nummer)
            .bind(&input.beskikket_til)
            .bind(input.beskikket_indfodsret)
            .bind(input.beskikket_medborgerskab)
            .bind(&input.arbejds_status)
            .bind(input.prioritet)
            .bind(input.sprogcenter_id)
            .bind(&input.kommentar)
            .fetch_one(pool)
            .await
    }

    /// Permanently delete a censor by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM censorer WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
