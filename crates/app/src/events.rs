//! The event service: organizer-side CRUD plus the participant-side listing.
//!
//! Ordering matters in `create`/`update`: validation runs first (no network
//! or storage call on a rejected form), the poster pipeline runs second, and
//! the event row is written last -- an upload failure therefore aborts the
//! whole operation and no row ever carries a dangling poster reference.

use std::sync::Arc;

use chrono::Utc;

use campusbuzz_core::error::CoreError;
use campusbuzz_core::event::{Event, EventCategory, EventDraft};
use campusbuzz_core::schedule::weekday_name;
use campusbuzz_core::store::{EventChanges, EventStore, NewEvent, RegistrationStore};
use campusbuzz_core::types::Id;
use campusbuzz_storage::{PosterSource, PosterUploader};

/// Organizer and participant operations over events.
#[derive(Clone)]
pub struct EventService {
    events: Arc<dyn EventStore>,
    registrations: Arc<dyn RegistrationStore>,
    posters: PosterUploader,
}

impl EventService {
    pub fn new(
        events: Arc<dyn EventStore>,
        registrations: Arc<dyn RegistrationStore>,
        posters: PosterUploader,
    ) -> Self {
        Self {
            events,
            registrations,
            posters,
        }
    }

    /// Events in a category, newest first. With `organizer_id` set this is
    /// the organizer's own list; without it, the participant browse view.
    /// An empty category is an empty list, never an error.
    pub async fn list_by_category(
        &self,
        category: EventCategory,
        organizer_id: Option<Id>,
    ) -> Result<Vec<Event>, CoreError> {
        self.events.list_by_category(category, organizer_id).await
    }

    pub async fn get(&self, event_id: Id) -> Result<Event, CoreError> {
        self.events
            .find(event_id)
            .await?
            .ok_or_else(|| CoreError::NotFound {
                entity: "event",
                id: event_id.to_string(),
            })
    }

    /// Create an event owned by `organizer`.
    pub async fn create(
        &self,
        organizer: Id,
        category: EventCategory,
        draft: EventDraft,
        poster: Option<PosterSource>,
    ) -> Result<Event, CoreError> {
        draft.validate(Utc::now().date_naive())?;

        let poster_url = self.posters.resolve(poster).await?;

        let event = self
            .events
            .insert(&NewEvent {
                organizer_id: organizer,
                category,
                name: draft.name,
                club: draft.club,
                event_date: draft.event_date,
                day_name: weekday_name(draft.event_date).to_string(),
                venue: draft.venue,
                description: draft.description,
                poster_url,
            })
            .await?;

        tracing::info!(event_id = %event.id, %organizer, "Event created");
        Ok(event)
    }

    /// Edit an event. Only the owning organizer may reach this path;
    /// `organizer_id` and the category never change.
    ///
    /// With `poster: None` the existing `poster_url` is preserved and the
    /// upload pipeline is not invoked at all.
    pub async fn update(
        &self,
        event_id: Id,
        caller: Id,
        draft: EventDraft,
        poster: Option<PosterSource>,
    ) -> Result<Event, CoreError> {
        let existing = self.owned_event(event_id, caller).await?;
        draft.validate(Utc::now().date_naive())?;

        let poster_url = match poster {
            None => existing.poster_url,
            some => self.posters.resolve(some).await?,
        };

        let event = self
            .events
            .update(
                event_id,
                &EventChanges {
                    name: draft.name,
                    club: draft.club,
                    event_date: draft.event_date,
                    day_name: weekday_name(draft.event_date).to_string(),
                    venue: draft.venue,
                    description: draft.description,
                    poster_url,
                },
            )
            .await?;

        tracing::info!(%event_id, "Event updated");
        Ok(event)
    }

    /// Delete an event and cascade its registrations.
    ///
    /// The purge runs first so no registration row outlives its event even
    /// if the second step fails; the schema's `ON DELETE CASCADE` is the
    /// backstop.
    pub async fn delete(&self, event_id: Id, caller: Id) -> Result<(), CoreError> {
        self.owned_event(event_id, caller).await?;

        let purged = self.registrations.purge_for_event(event_id).await?;
        self.events.delete(event_id).await?;

        tracing::info!(%event_id, purged, "Event deleted");
        Ok(())
    }

    /// Fetch the event and verify `caller` owns it.
    async fn owned_event(&self, event_id: Id, caller: Id) -> Result<Event, CoreError> {
        let event = self.get(event_id).await?;
        if event.organizer_id != caller {
            return Err(CoreError::Forbidden(
                "Only the owning organizer can modify this event".into(),
            ));
        }
        Ok(event)
    }
}
