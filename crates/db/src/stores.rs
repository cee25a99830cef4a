//! PostgreSQL implementations of the [`campusbuzz_core::store`] port traits.
//!
//! Thin adapters over the repository layer: each method delegates the SQL to
//! a repository, converts rows into domain types, and maps `sqlx` errors
//! into the domain taxonomy via [`crate::map_db_err`].

use async_trait::async_trait;
use sqlx::PgPool;

use campusbuzz_core::auth::{Account, AuthSession};
use campusbuzz_core::error::CoreError;
use campusbuzz_core::event::{Event, EventCategory};
use campusbuzz_core::profile::{Profile, Role};
use campusbuzz_core::registration::Registrant;
use campusbuzz_core::store::{
    AccountStore, EventChanges, EventStore, NewEvent, NewRegistration, ProfileStore,
    RegistrationStore, SessionStore,
};
use campusbuzz_core::types::{Id, Timestamp};

use crate::repositories::{
    AccountRepo, AuthSessionRepo, EventRepo, ProfileRepo, RegistrationRepo,
};
use crate::{is_unique_violation, map_db_err};

/// Accounts backed by the `accounts` table.
#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create(&self, email: &str, password_hash: &str) -> Result<Account, CoreError> {
        let row = AccountRepo::create(&self.pool, email, password_hash)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    CoreError::Conflict("An account with this email already exists".into())
                } else {
                    map_db_err(err)
                }
            })?;
        Ok(row.into())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, CoreError> {
        let row = AccountRepo::find_by_email(&self.pool, email)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(Into::into))
    }
}

/// Login sessions backed by the `auth_sessions` table.
#[derive(Clone)]
pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn create(
        &self,
        account_id: Id,
        token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<AuthSession, CoreError> {
        let row = AuthSessionRepo::create(&self.pool, account_id, token_hash, expires_at)
            .await
            .map_err(map_db_err)?;
        Ok(row.into())
    }

    async fn find_active(&self, token_hash: &str) -> Result<Option<AuthSession>, CoreError> {
        let row = AuthSessionRepo::find_active(&self.pool, token_hash)
            .await
            .map_err(map_db_err)?;
        Ok(row.map(Into::into))
    }

    async fn revoke(&self, token_hash: &str) -> Result<bool, CoreError> {
        AuthSessionRepo::revoke(&self.pool, token_hash)
            .await
            .map_err(map_db_err)
    }
}

/// Profiles backed by the `profiles` table.
#[derive(Clone)]
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn find(&self, id: Id) -> Result<Option<Profile>, CoreError> {
        let row = ProfileRepo::find_by_id(&self.pool, id)
            .await
            .map_err(map_db_err)?;
        row.map(Profile::try_from).transpose()
    }

    async fn upsert(
        &self,
        id: Id,
        full_name: &str,
        year: i16,
        role: Role,
    ) -> Result<Profile, CoreError> {
        let row = ProfileRepo::upsert(&self.pool, id, full_name, year, role.as_str())
            .await
            .map_err(map_db_err)?;
        row.try_into()
    }

    async fn update_basic(&self, id: Id, full_name: &str, year: i16) -> Result<bool, CoreError> {
        ProfileRepo::update_basic(&self.pool, id, full_name, year)
            .await
            .map_err(map_db_err)
    }
}

/// Events backed by the `events` table.
#[derive(Clone)]
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn insert(&self, input: &NewEvent) -> Result<Event, CoreError> {
        let row = EventRepo::create(&self.pool, input)
            .await
            .map_err(map_db_err)?;
        row.try_into()
    }

    async fn find(&self, id: Id) -> Result<Option<Event>, CoreError> {
        let row = EventRepo::find_by_id(&self.pool, id)
            .await
            .map_err(map_db_err)?;
        row.map(Event::try_from).transpose()
    }

    async fn list_by_category(
        &self,
        category: EventCategory,
        organizer_id: Option<Id>,
    ) -> Result<Vec<Event>, CoreError> {
        let rows = EventRepo::list_by_category(&self.pool, category.as_str(), organizer_id)
            .await
            .map_err(map_db_err)?;
        rows.into_iter().map(Event::try_from).collect()
    }

    async fn update(&self, id: Id, changes: &EventChanges) -> Result<Event, CoreError> {
        let row = EventRepo::update(&self.pool, id, changes)
            .await
            .map_err(map_db_err)?
            .ok_or(CoreError::NotFound {
                entity: "event",
                id: id.to_string(),
            })?;
        row.try_into()
    }

    async fn delete(&self, id: Id) -> Result<bool, CoreError> {
        EventRepo::delete(&self.pool, id).await.map_err(map_db_err)
    }
}

/// Registrations backed by the `registrations` table.
#[derive(Clone)]
pub struct PgRegistrationStore {
    pool: PgPool,
}

impl PgRegistrationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationStore for PgRegistrationStore {
    async fn exists(&self, event_id: Id, participant_id: Id) -> Result<bool, CoreError> {
        RegistrationRepo::exists(&self.pool, event_id, participant_id)
            .await
            .map_err(map_db_err)
    }

    async fn insert(&self, input: &NewRegistration) -> Result<bool, CoreError> {
        // The unique constraint is the backstop for check-then-act races:
        // a duplicate pair is reported as "not inserted", never as an error.
        match RegistrationRepo::create(&self.pool, input).await {
            Ok(_) => Ok(true),
            Err(err) if is_unique_violation(&err) => {
                tracing::debug!(
                    event_id = %input.event_id,
                    participant_id = %input.participant_id,
                    "Duplicate registration rejected by constraint"
                );
                Ok(false)
            }
            Err(err) => Err(map_db_err(err)),
        }
    }

    async fn delete(&self, event_id: Id, participant_id: Id) -> Result<bool, CoreError> {
        RegistrationRepo::delete(&self.pool, event_id, participant_id)
            .await
            .map_err(map_db_err)
    }

    async fn list_for_event(&self, event_id: Id) -> Result<Vec<Registrant>, CoreError> {
        let rows = RegistrationRepo::list_for_event(&self.pool, event_id)
            .await
            .map_err(map_db_err)?;
        rows.into_iter().map(Registrant::try_from).collect()
    }

    async fn purge_for_event(&self, event_id: Id) -> Result<u64, CoreError> {
        RegistrationRepo::purge_for_event(&self.pool, event_id)
            .await
            .map_err(map_db_err)
    }
}
