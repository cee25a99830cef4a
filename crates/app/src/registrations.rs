//! The registration manager.
//!
//! Enforces the one-registration-per-(participant, event) invariant at the
//! service level (check-then-act) with the store's unique constraint as the
//! backstop. The "am I registered" flag is always re-derived from
//! [`RegistrationManager::is_registered`] on screen entry, never cached
//! across navigation.

use std::sync::Arc;

use campusbuzz_core::error::CoreError;
use campusbuzz_core::registration::{Registrant, RegistrationForm};
use campusbuzz_core::stats::{tally, YearSlice};
use campusbuzz_core::store::{NewRegistration, ProfileStore, RegistrationStore};
use campusbuzz_core::types::Id;

/// Participant-side register/unregister plus the organizer-side views.
#[derive(Clone)]
pub struct RegistrationManager {
    registrations: Arc<dyn RegistrationStore>,
    profiles: Arc<dyn ProfileStore>,
}

impl RegistrationManager {
    pub fn new(registrations: Arc<dyn RegistrationStore>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self {
            registrations,
            profiles,
        }
    }

    /// Existence check for the pair.
    pub async fn is_registered(&self, event_id: Id, participant_id: Id) -> Result<bool, CoreError> {
        self.registrations.exists(event_id, participant_id).await
    }

    /// Register a participant for an event.
    ///
    /// Returns `true` when a new registration was created and `false` when
    /// the pair was already registered -- both by the pre-check and when a
    /// concurrent duplicate is rejected by the store. Never errors on a
    /// duplicate, never creates a second row.
    ///
    /// The participant's profile `full_name`/`year` are refreshed from the
    /// form as a side effect.
    pub async fn register(
        &self,
        event_id: Id,
        participant_id: Id,
        form: RegistrationForm,
    ) -> Result<bool, CoreError> {
        form.validate()?;

        self.profiles
            .update_basic(participant_id, form.full_name.trim(), form.year)
            .await?;

        if self.registrations.exists(event_id, participant_id).await? {
            return Ok(false);
        }

        let inserted = self
            .registrations
            .insert(&NewRegistration {
                event_id,
                participant_id,
                year: form.year,
                branch: form.branch,
                expectations: form.expectations_trimmed(),
            })
            .await?;

        if inserted {
            tracing::info!(%event_id, %participant_id, "Registered");
        }
        Ok(inserted)
    }

    /// Remove the registration for the pair.
    ///
    /// Returns `false` (still `Ok`) when there was nothing to remove.
    pub async fn unregister(&self, event_id: Id, participant_id: Id) -> Result<bool, CoreError> {
        let removed = self.registrations.delete(event_id, participant_id).await?;
        if removed {
            tracing::info!(%event_id, %participant_id, "Unregistered");
        }
        Ok(removed)
    }

    /// Registrations for an event with each registrant's profile name,
    /// for the organizer's list view.
    pub async fn list_for_event(&self, event_id: Id) -> Result<Vec<Registrant>, CoreError> {
        self.registrations.list_for_event(event_id).await
    }

    /// Year-bucketed counts for the organizer's stats chart.
    pub async fn year_stats(&self, event_id: Id) -> Result<Vec<YearSlice>, CoreError> {
        let registrants = self.registrations.list_for_event(event_id).await?;
        Ok(tally(registrants.iter().map(|r| r.year)))
    }
}
