//! Event entity, categories, and submission validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{Id, Timestamp};

/// Event category. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Technical,
    Cultural,
}

impl EventCategory {
    /// Database text value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Cultural => "cultural",
        }
    }

    /// Parse from the database `category` column.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "technical" => Ok(Self::Technical),
            "cultural" => Ok(Self::Cultural),
            other => Err(CoreError::Internal(format!(
                "Unknown event category '{other}'"
            ))),
        }
    }
}

/// A scheduled happening, owned by exactly one organizer.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: Id,
    /// Owning identity. Immutable after creation.
    pub organizer_id: Id,
    /// Immutable after creation.
    pub category: EventCategory,
    pub name: String,
    pub club: String,
    pub event_date: NaiveDate,
    /// Weekday label derived from `event_date`.
    pub day_name: String,
    pub venue: String,
    pub description: String,
    /// Null until a poster image has been committed to object storage.
    pub poster_url: Option<String>,
    pub created_at: Timestamp,
}

/// User-supplied fields for creating or editing an event.
///
/// Every field here is required on submission; `organizer_id` and the
/// category are carried separately because they never change after creation.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub name: String,
    pub club: String,
    pub event_date: NaiveDate,
    pub venue: String,
    pub description: String,
}

impl EventDraft {
    /// Validate the submission against `today`.
    ///
    /// All text fields must be non-blank and the date must not lie in the
    /// past. Runs before any network or storage call.
    pub fn validate(&self, today: NaiveDate) -> Result<(), CoreError> {
        let required: [(&str, &str); 4] = [
            ("Event name", &self.name),
            ("Club name", &self.club),
            ("Venue", &self.venue),
            ("Description", &self.description),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::Validation(format!("{label} is required")));
            }
        }
        if self.event_date < today {
            return Err(CoreError::Validation(
                "Event date must not be in the past".into(),
            ));
        }
        Ok(())
    }
}
