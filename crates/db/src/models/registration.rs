use sqlx::FromRow;
use uuid::Uuid;

use campusbuzz_core::error::CoreError;
use campusbuzz_core::registration::{Branch, Registrant, Registration};
use campusbuzz_core::types::Timestamp;

/// Row from the `registrations` table.
#[derive(Debug, Clone, FromRow)]
pub struct RegistrationRow {
    pub id: Uuid,
    pub event_id: Uuid,
    pub participant_id: Uuid,
    pub year: i16,
    pub branch: String,
    pub expectations: Option<String>,
    pub created_at: Timestamp,
}

impl TryFrom<RegistrationRow> for Registration {
    type Error = CoreError;

    fn try_from(row: RegistrationRow) -> Result<Self, Self::Error> {
        Ok(Registration {
            id: row.id,
            event_id: row.event_id,
            participant_id: row.participant_id,
            year: row.year,
            branch: Branch::parse(&row.branch)?,
            expectations: row.expectations,
            created_at: row.created_at,
        })
    }
}

/// Registration joined with the registrant's profile name
/// (`registrations LEFT JOIN profiles`).
#[derive(Debug, Clone, FromRow)]
pub struct RegistrantRow {
    pub registration_id: Uuid,
    pub full_name: Option<String>,
    pub year: i16,
    pub branch: String,
    pub expectations: Option<String>,
}

impl TryFrom<RegistrantRow> for Registrant {
    type Error = CoreError;

    fn try_from(row: RegistrantRow) -> Result<Self, Self::Error> {
        Ok(Registrant {
            registration_id: row.registration_id,
            full_name: row.full_name,
            year: row.year,
            branch: Branch::parse(&row.branch)?,
            expectations: row.expectations,
        })
    }
}
