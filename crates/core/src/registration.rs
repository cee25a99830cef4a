//! Registrations: a participant's claim on an event, unique per pair.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{Id, Timestamp};

/// The fixed set of academic branches a registrant can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Branch {
    Cse,
    Ece,
    Ise,
    Aiml,
    Aids,
    Csml,
    Csds,
}

impl Branch {
    /// Database text value (matches the form's dropdown labels).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cse => "CSE",
            Self::Ece => "ECE",
            Self::Ise => "ISE",
            Self::Aiml => "AIML",
            Self::Aids => "AIDS",
            Self::Csml => "CSML",
            Self::Csds => "CSDS",
        }
    }

    /// Parse a branch code. An empty or unknown value is a validation error.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "CSE" => Ok(Self::Cse),
            "ECE" => Ok(Self::Ece),
            "ISE" => Ok(Self::Ise),
            "AIML" => Ok(Self::Aiml),
            "AIDS" => Ok(Self::Aids),
            "CSML" => Ok(Self::Csml),
            "CSDS" => Ok(Self::Csds),
            other => Err(CoreError::Validation(format!(
                "Unknown branch '{other}'. Must be one of: CSE, ECE, ISE, AIML, AIDS, CSML, CSDS"
            ))),
        }
    }
}

/// One participant's registration for one event.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub id: Id,
    pub event_id: Id,
    pub participant_id: Id,
    pub year: i16,
    pub branch: Branch,
    pub expectations: Option<String>,
    pub created_at: Timestamp,
}

/// A registration joined with the registrant's profile name, for the
/// organizer-facing list.
#[derive(Debug, Clone, Serialize)]
pub struct Registrant {
    pub registration_id: Id,
    /// `None` when the participant never completed a profile.
    pub full_name: Option<String>,
    pub year: i16,
    pub branch: Branch,
    pub expectations: Option<String>,
}

/// The registration form a participant submits.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub full_name: String,
    pub year: i16,
    pub branch: Branch,
    /// Optional free text; blank input is treated as absent.
    pub expectations: Option<String>,
}

impl RegistrationForm {
    /// Validate required fields. Branch validity is guaranteed by the type;
    /// the name must be non-blank and the year in range.
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

    /// Expectations with blank input normalized to `None`.
    pub fn expectations_trimmed(&self) -> Option<String> {
        self.expectations
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    }
}
