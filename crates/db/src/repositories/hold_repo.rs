//! Repository for the `hold` table.
//!
//! Reads always return [`HoldWithNames`]. Writes that must hand back the
//! join-enriched row (create, lock toggle) run as a single statement: a
//! data-modifying CTE whose output is joined onto `sprogcenter` and
//! `censorer`, so no concurrent writer can slip in between the write and
//! the read-back.

use sqlx::PgPool;
use censur_core::types::DbId;

use crate::models::hold::{HoldJoinedRow, HoldWithNames, NewHold};

/// Select list over a hold aliased `h`, with ASCII column aliases matching
/// [`HoldJoinedRow`].
const JOINED_COLUMNS: &str = "h.id, h.deltagere, h.termin, \
    h.prøve AS prove, h.prøvetype AS provetype, h.låst AS laast, \
    s.id AS sprogcenter_id, s.navn AS sprogcenter_navn, \
    c.id AS censor_id, c.fornavn AS censor_fornavn, c.efternavn AS censor_efternavn";

/// Left joins resolving both optional references of `h`.
const JOINS: &str = "LEFT JOIN sprogcenter s ON s.id = h.sprogcenter_id \
    LEFT JOIN censorer c ON c.id = h.censorer_id";

/// Provides list/create/delete and lock-toggle operations for holds.
pub struct HoldRepo;

impl HoldRepo {
    /// List holds ordered by ID, optionally restricted to one term.
    pub async fn list(
        pool: &PgPool,
        termin: Option<&str>,
    ) -> Result<Vec<HoldWithNames>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM hold h {JOINS}
             WHERE ($1::TEXT IS NULL OR h.termin = $1)
             ORDER BY h.id ASC"
        );
        let rows = sqlx::query_as::<_, HoldJoinedRow>(&query)
            .bind(termin)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(HoldWithNames::from).collect())
    }

    /// Find a hold by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HoldWithNames>, sqlx::Error> {
        let query = format!("SELECT {JOINED_COLUMNS} FROM hold h {JOINS} WHERE h.id = $1");
        let row = sqlx::query_as::<_, HoldJoinedRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(HoldWithNames::from))
    }

    /// Insert a new hold, returning it with its references resolved.
    pub async fn create(pool: &PgPool, input: &NewHold) -> Result<HoldWithNames, sqlx::Error> {
        let query = format!(
            "WITH inserted AS (
                INSERT INTO hold (deltagere, termin, prøve, prøvetype, låst, sprogcenter_id, censorer_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING *
             )
             SELECT {JOINED_COLUMNS} FROM inserted h {JOINS}"
        );
        let row = sqlx::query_as::<_, HoldJoinedRow>(&query)
            .bind(input.deltagere)
            .bind(&input.termin)
            .bind(&input.prove)
            .bind(&input.provetype)
            .bind(input.laast)
            .bind(input.sprogcenter_id)
            .bind(input.censorer_id)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Flip the locked flag in one statement and return the updated hold.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn toggle_lock(pool: &PgPool, id: DbId) -> Result<Option<HoldWithNames>, sqlx::Error> {
        let query = format!(
            "WITH toggled AS (
                UPDATE hold SET låst = NOT låst WHERE id = $1 RETURNING *
             )
             SELECT {JOINED_COLUMNS} FROM toggled h {JOINS}"
        );
        let row = sqlx::query_as::<_, HoldJoinedRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        if let Some(row) = &row {
            tracing::debug!(hold_id = id, locked = row.laast, "Toggled hold lock");
        }
        Ok(row.map(HoldWithNames::from))
    }

    /// Permanently delete a hold by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hold WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Distinct term labels across all holds, newest label first.
    pub async fn list_terms(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT termin FROM hold ORDER BY termin DESC")
            .fetch_all(pool)
            .await
    }
}
