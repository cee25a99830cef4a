//! Profiles and roles.
//!
//! A profile is created lazily: an account exists the moment sign-up
//! succeeds, but its profile row appears only once the user picks a role.
//! "No profile yet" is therefore a legitimate state, not an error.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Id;

/// The two roles a profile can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Organizer,
    Participant,
}

impl Role {
    /// Database text value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Organizer => "organizer",
            Self::Participant => "participant",
        }
    }

    /// Parse from the database `role` column.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "organizer" => Ok(Self::Organizer),
            "participant" => Ok(Self::Participant),
            other => Err(CoreError::Internal(format!("Unknown role '{other}'"))),
        }
    }
}

/// Per-identity profile record.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    /// Equal to the owning account's identity.
    pub id: Id,
    pub full_name: String,
    /// Year of study, 1-4.
    pub year: i16,
    /// Absent until the user has picked a role.
    pub role: Option<Role>,
}

/// Fields written when the user completes their profile.
#[derive(Debug, Clone)]
pub struct ProfileUpsert {
    pub full_name: String,
    pub year: i16,
    pub role: Role,
}

impl ProfileUpsert {
    /// Validate the role-choice form. Name must be non-blank and year 1-4.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.full_name.trim().is_empty() {
            return Err(CoreError::Validation("Full name is required".into()));
        }
        if !(1..=4).contains(&self.year) {
            return Err(CoreError::Validation(
                "Year must be between 1 and 4".into(),
            ));
        }
        Ok(())
    }
}
