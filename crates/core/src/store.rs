//! Storage port traits.
//!
//! The application services never talk to a backend directly; they go
//! through these traits. `campusbuzz-db` provides the PostgreSQL
//! implementations, and the integration tests substitute in-memory ones.
//!
//! Uniqueness invariants (one profile per identity, one registration per
//! participant-event pair) are enforced by the implementation's storage
//! layer as the source of truth; callers perform existence checks for user
//! experience only and must tolerate a rejected race duplicate.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::auth::{Account, AuthSession};
use crate::error::CoreError;
use crate::event::{Event, EventCategory};
use crate::profile::{Profile, Role};
use crate::registration::{Branch, Registrant};
use crate::types::{Id, Timestamp};

/// Insert payload for a new event. `day_name` is always derived from
/// `event_date` by the caller before it reaches a store.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub organizer_id: Id,
    pub category: EventCategory,
    pub name: String,
    pub club: String,
    pub event_date: NaiveDate,
    pub day_name: String,
    pub venue: String,
    pub description: String,
    pub poster_url: Option<String>,
}

/// Update payload for an existing event. Only post-creation-editable fields
/// appear here; `organizer_id` and the category are immutable by construction.
#[derive(Debug, Clone)]
pub struct EventChanges {
    pub name: String,
    pub club: String,
    pub event_date: NaiveDate,
    pub day_name: String,
    pub venue: String,
    pub description: String,
    pub poster_url: Option<String>,
}

/// Insert payload for a new registration.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub event_id: Id,
    pub participant_id: Id,
    pub year: i16,
    pub branch: Branch,
    pub expectations: Option<String>,
}

/// Accounts table access.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account. A duplicate email is a [`CoreError::Conflict`].
    async fn create(&self, email: &str, password_hash: &str) -> Result<Account, CoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, CoreError>;
}

/// Login-session table access.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(
        &self,
        account_id: Id,
        token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<AuthSession, CoreError>;

    /// Find a session by token hash, excluding expired rows.
    async fn find_active(&self, token_hash: &str) -> Result<Option<AuthSession>, CoreError>;

    /// Delete the session with the given token hash. Returns `false` when no
    /// such session existed (already signed out elsewhere).
    async fn revoke(&self, token_hash: &str) -> Result<bool, CoreError>;
}

/// Profiles table access.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find(&self, id: Id) -> Result<Option<Profile>, CoreError>;

    /// Insert or replace the profile for `id` (at most one row per identity).
    async fn upsert(
        &self,
        id: Id,
        full_name: &str,
        year: i16,
        role: Role,
    ) -> Result<Profile, CoreError>;

    /// Refresh `full_name`/`year` without touching the role. Returns `false`
    /// when no profile row exists yet.
    async fn update_basic(&self, id: Id, full_name: &str, year: i16) -> Result<bool, CoreError>;
}

/// Events table access.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn insert(&self, input: &NewEvent) -> Result<Event, CoreError>;

    async fn find(&self, id: Id) -> Result<Option<Event>, CoreError>;

    /// List events in a category, newest `created_at` first, optionally
    /// restricted to one organizer. An empty result is `Ok(vec![])`.
    async fn list_by_category(
        &self,
        category: EventCategory,
        organizer_id: Option<Id>,
    ) -> Result<Vec<Event>, CoreError>;

    async fn update(&self, id: Id, changes: &EventChanges) -> Result<Event, CoreError>;

    /// Delete the event row. Returns `false` when it was already gone.
    async fn delete(&self, id: Id) -> Result<bool, CoreError>;
}

/// Registrations table access.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    async fn exists(&self, event_id: Id, participant_id: Id) -> Result<bool, CoreError>;

    /// Insert a registration. Returns `false` (and inserts nothing) when the
    /// `(event_id, participant_id)` pair already exists -- the uniqueness
    /// constraint is the backstop for check-then-act races.
    async fn insert(&self, input: &NewRegistration) -> Result<bool, CoreError>;

    /// Delete the registration for the pair. Returns `false` when none existed.
    async fn delete(&self, event_id: Id, participant_id: Id) -> Result<bool, CoreError>;

    /// Registrations for an event joined with each registrant's profile name.
    async fn list_for_event(&self, event_id: Id) -> Result<Vec<Registrant>, CoreError>;

    /// Remove all registrations for an event (cascade on event delete).
    /// Returns the number of rows removed.
    async fn purge_for_event(&self, event_id: Id) -> Result<u64, CoreError>;
}
