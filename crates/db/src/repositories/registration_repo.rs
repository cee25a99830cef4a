//! Repository for the `registrations` table.

use sqlx::PgPool;
use uuid::Uuid;

use campusbuzz_core::store::NewRegistration;

use crate::models::registration::{RegistrantRow, RegistrationRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, event_id, participant_id, year, branch, expectations, created_at";

/// Provides CRUD operations for registrations.
pub struct RegistrationRepo;

impl RegistrationRepo {
    /// Existence check for the `(event_id, participant_id)` pair.
    pub async fn exists(
        pool: &PgPool,
        event_id: Uuid,
        participant_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let found: Option<Uuid> = sqlx::query_scalar(
            "SELECT id FROM registrations WHERE event_id = $1 AND participant_id = $2",
        )
        .bind(event_id)
        .bind(participant_id)
        .fetch_optional(pool)
        .await?;
        Ok(found.is_some())
    }

    /// Insert a registration, returning the created row.
    ///
    /// A duplicate pair violates `uq_registrations_event_participant`.
    pub async fn create(
        pool: &PgPool,
        input: &NewRegistration,
    ) -> Result<RegistrationRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO registrations (event_id, participant_id, year, branch, expectations)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RegistrationRow>(&query)
            .bind(input.event_id)
            .bind(input.participant_id)
            .bind(input.year)
            .bind(input.branch.as_str())
            .bind(&input.expectations)
            .fetch_one(pool)
            .await
    }

    /// Delete the registration for the pair. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        event_id: Uuid,
        participant_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM registrations WHERE event_id = $1 AND participant_id = $2")
                .bind(event_id)
                .bind(participant_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Registrations for an event joined with each registrant's profile name.
    pub async fn list_for_event(
        pool: &PgPool,
        event_id: Uuid,
    ) -> Result<Vec<RegistrantRow>, sqlx::Error> {
        sqlx::query_as::<_, RegistrantRow>(
            "SELECT r.id AS registration_id, p.full_name, r.year, r.branch, r.expectations
             FROM registrations r
             LEFT JOIN profiles p ON p.id = r.participant_id
             WHERE r.event_id = $1
             ORDER BY r.created_at",
        )
        .bind(event_id)
        .fetch_all(pool)
        .await
    }

    /// Remove all registrations for an event. Returns the count removed.
    pub async fn purge_for_event(pool: &PgPool, event_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM registrations WHERE event_id = $1")
            .bind(event_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
