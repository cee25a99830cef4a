//! Repository for the `events` table.

use sqlx::PgPool;
use uuid::Uuid;

use campusbuzz_core::store::{EventChanges, NewEvent};

use crate::models::event::EventRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, organizer_id, category, name, club, event_date, day_name, \
                        venue, description, poster_url, created_at";

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewEvent) -> Result<EventRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO events
                 (organizer_id, category, name, club, event_date, day_name,
                  venue, description, poster_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EventRow>(&query)
            .bind(input.organizer_id)
            .bind(input.category.as_str())
            .bind(&input.name)
            .bind(&input.club)
            .bind(input.event_date)
            .bind(&input.day_name)
            .bind(&input.venue)
            .bind(&input.description)
            .bind(&input.poster_url)
            .fetch_one(pool)
            .await
    }

    /// Find an event by id.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<EventRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, EventRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List events in a category ordered newest-first, optionally filtered
    /// to one organizer.
    pub async fn list_by_category(
        pool: &PgPool,
        category: &str,
        organizer_id: Option<Uuid>,
    ) -> Result<Vec<EventRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE category = $1 AND ($2::uuid IS NULL OR organizer_id = $2)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, EventRow>(&query)
            .bind(category)
            .bind(organizer_id)
            .fetch_all(pool)
            .await
    }

    /// Update the post-creation-editable fields of an event.
    ///
    /// `organizer_id` and `category` are deliberately absent from the SET
    /// list. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        changes: &EventChanges,
    ) -> Result<Option<EventRow>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                 name = $2,
                 club = $3,
                 event_date = $4,
                 day_name = $5,
                 venue = $6,
                 description = $7,
                 poster_url = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EventRow>(&query)
            .bind(id)
            .bind(&changes.name)
            .bind(&changes.club)
            .bind(changes.event_date)
            .bind(&changes.day_name)
            .bind(&changes.venue)
            .bind(&changes.description)
            .bind(&changes.poster_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
