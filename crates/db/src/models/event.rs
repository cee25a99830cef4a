use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

use campusbuzz_core::error::CoreError;
use campusbuzz_core::event::{Event, EventCategory};
use campusbuzz_core::types::Timestamp;

/// Row from the `events` table.
#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: Uuid,
    pub organizer_id: Uuid,
    pub category: String,
    pub name: String,
    pub club: String,
    pub event_date: NaiveDate,
    pub day_name: String,
    pub venue: String,
    pub description: String,
    pub poster_url: Option<String>,
    pub created_at: Timestamp,
}

impl TryFrom<EventRow> for Event {
    type Error = CoreError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        Ok(Event {
            id: row.id,
            organizer_id: row.organizer_id,
            category: EventCategory::parse(&row.category)?,
            name: row.name,
            club: row.club,
            event_date: row.event_date,
            day_name: row.day_name,
            venue: row.venue,
            description: row.description,
            poster_url: row.poster_url,
            created_at: row.created_at,
        })
    }
}
