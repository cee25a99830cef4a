//! Shared fixtures for the service-level tests.
//!
//! `InMemory` implements every storage port over plain `Mutex`-guarded
//! tables, including the uniqueness checks the real schema enforces, so
//! the services run end to end without a database.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Utc, Weekday};
use uuid::Uuid;

use campusbuzz_core::auth::{Account, AuthSession};
use campusbuzz_core::error::CoreError;
use campusbuzz_core::event::{Event, EventCategory, EventDraft};
use campusbuzz_core::profile::{Profile, ProfileUpsert, Role};
use campusbuzz_core::registration::{Branch, Registrant, Registration, RegistrationForm};
use campusbuzz_core::store::{
    AccountStore, EventChanges, EventStore, NewEvent, NewRegistration, ProfileStore,
    RegistrationStore, SessionStore,
};
use campusbuzz_core::types::{Id, Timestamp};
use campusbuzz_storage::{ObjectStorage, PosterUploader};

use campusbuzz_app::auth::AuthService;
use campusbuzz_app::events::EventService;
use campusbuzz_app::registrations::RegistrationManager;
use campusbuzz_app::router::SessionRouter;

/// Minimal PNG: the magic header is all format sniffing needs.
pub const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// All tables behind one backend, shared by every store trait.
#[derive(Default)]
pub struct InMemory {
    accounts: Mutex<Vec<Account>>,
    sessions: Mutex<Vec<AuthSession>>,
    profiles: Mutex<HashMap<Id, Profile>>,
    events: Mutex<Vec<Event>>,
    registrations: Mutex<Vec<Registration>>,
}

#[async_trait]
impl AccountStore for InMemory {
    async fn create(&self, email: &str, password_hash: &str) -> Result<Account, CoreError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.email == email) {
            return Err(CoreError::Conflict(format!(
                "An account with email '{email}' already exists"
            )));
        }
        let account = Account {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        accounts.push(account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, CoreError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.email == email).cloned())
    }
}

#[async_trait]
impl SessionStore for InMemory {
    async fn create(
        &self,
        account_id: Id,
        token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<AuthSession, CoreError> {
        let session = AuthSession {
            id: Uuid::new_v4(),
            account_id,
            token_hash: token_hash.to_string(),
            expires_at,
            created_at: Utc::now(),
        };
        self.sessions.lock().unwrap().push(session.clone());
        Ok(session)
    }

    async fn find_active(&self, token_hash: &str) -> Result<Option<AuthSession>, CoreError> {
        let sessions = self.sessions.lock().unwrap();
        Ok(sessions
            .iter()
            .find(|s| s.token_hash == token_hash && s.expires_at > Utc::now())
            .cloned())
    }

    async fn revoke(&self, token_hash: &str) -> Result<bool, CoreError> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|s| s.token_hash != token_hash);
        Ok(sessions.len() < before)
    }
}

#[async_trait]
impl ProfileStore for InMemory {
    async fn find(&self, id: Id) -> Result<Option<Profile>, CoreError> {
        Ok(self.profiles.lock().unwrap().get(&id).cloned())
    }

    async fn upsert(
        &self,
        id: Id,
        full_name: &str,
        year: i16,
        role: Role,
    ) -> Result<Profile, CoreError> {
        let profile = Profile {
            id,
            full_name: full_name.to_string(),
            year,
            role: Some(role),
        };
        self.profiles.lock().unwrap().insert(id, profile.clone());
        Ok(profile)
    }

    async fn update_basic(&self, id: Id, full_name: &str, year: i16) -> Result<bool, CoreError> {
        let mut profiles = self.profiles.lock().unwrap();
        match profiles.get_mut(&id) {
            Some(profile) => {
                profile.full_name = full_name.to_string();
                profile.year = year;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl EventStore for InMemory {
    async fn insert(&self, input: &NewEvent) -> Result<Event, CoreError> {
        let event = Event {
            id: Uuid::new_v4(),
            organizer_id: input.organizer_id,
            category: input.category,
            name: input.name.clone(),
            club: input.club.clone(),
            event_date: input.event_date,
            day_name: input.day_name.clone(),
            venue: input.venue.clone(),
            description: input.description.clone(),
            poster_url: input.poster_url.clone(),
            created_at: Utc::now(),
        };
        self.events.lock().unwrap().push(event.clone());
        Ok(event)
    }

    async fn find(&self, id: Id) -> Result<Option<Event>, CoreError> {
        let events = self.events.lock().unwrap();
        Ok(events.iter().find(|e| e.id == id).cloned())
    }

    async fn list_by_category(
        &self,
        category: EventCategory,
        organizer_id: Option<Id>,
    ) -> Result<Vec<Event>, CoreError> {
        let events = self.events.lock().unwrap();
        // Insertion order stands in for created_at; newest first.
        Ok(events
            .iter()
            .rev()
            .filter(|e| e.category == category)
            .filter(|e| organizer_id.map_or(true, |id| e.organizer_id == id))
            .cloned()
            .collect())
    }

    async fn update(&self, id: Id, changes: &EventChanges) -> Result<Event, CoreError> {
        let mut events = self.events.lock().unwrap();
        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "event",
                id: id.to_string(),
            })?;
        event.name = changes.name.clone();
        event.club = changes.club.clone();
        event.event_date = changes.event_date;
        event.day_name = changes.day_name.clone();
        event.venue = changes.venue.clone();
        event.description = changes.description.clone();
        event.poster_url = changes.poster_url.clone();
        Ok(event.clone())
    }

    async fn delete(&self, id: Id) -> Result<bool, CoreError> {
        let mut events = self.events.lock().unwrap();
        let before = events.len();
        events.retain(|e| e.id != id);
        Ok(events.len() < before)
    }
}

#[async_trait]
impl RegistrationStore for InMemory {
    async fn exists(&self, event_id: Id, participant_id: Id) -> Result<bool, CoreError> {
        let rows = self.registrations.lock().unwrap();
        Ok(rows
            .iter()
            .any(|r| r.event_id == event_id && r.participant_id == participant_id))
    }

    async fn insert(&self, input: &NewRegistration) -> Result<bool, CoreError> {
        let mut rows = self.registrations.lock().unwrap();
        if rows
            .iter()
            .any(|r| r.event_id == input.event_id && r.participant_id == input.participant_id)
        {
            return Ok(false);
        }
        rows.push(Registration {
            id: Uuid::new_v4(),
            event_id: input.event_id,
            participant_id: input.participant_id,
            year: input.year,
            branch: input.branch,
            expectations: input.expectations.clone(),
            created_at: Utc::now(),
        });
        Ok(true)
    }

    async fn delete(&self, event_id: Id, participant_id: Id) -> Result<bool, CoreError> {
        let mut rows = self.registrations.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !(r.event_id == event_id && r.participant_id == participant_id));
        Ok(rows.len() < before)
    }

    async fn list_for_event(&self, event_id: Id) -> Result<Vec<Registrant>, CoreError> {
        let rows = self.registrations.lock().unwrap();
        let profiles = self.profiles.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|r| r.event_id == event_id)
            .map(|r| Registrant {
                registration_id: r.id,
                full_name: profiles.get(&r.participant_id).map(|p| p.full_name.clone()),
                year: r.year,
                branch: r.branch,
                expectations: r.expectations.clone(),
            })
            .collect())
    }

    async fn purge_for_event(&self, event_id: Id) -> Result<u64, CoreError> {
        let mut rows = self.registrations.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.event_id != event_id);
        Ok((before - rows.len()) as u64)
    }
}

/// Object storage that counts `put` calls and hands out stable URLs.
#[derive(Default)]
pub struct CountingStorage {
    puts: AtomicUsize,
}

impl CountingStorage {
    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ObjectStorage for CountingStorage {
    async fn put(&self, _key: &str, _bytes: Vec<u8>, _content_type: &str) -> Result<(), CoreError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://cdn.test.invalid/{key}")
    }
}

/// Every service wired over one shared backend.
pub struct TestEnv {
    pub backend: Arc<InMemory>,
    pub storage: Arc<CountingStorage>,
    pub auth: AuthService,
    pub router: SessionRouter,
    pub events: EventService,
    pub registrations: RegistrationManager,
}

pub fn env() -> TestEnv {
    let backend = Arc::new(InMemory::default());
    let storage = Arc::new(CountingStorage::default());

    let auth = AuthService::new(
        Arc::clone(&backend) as Arc<dyn AccountStore>,
        Arc::clone(&backend) as Arc<dyn SessionStore>,
        30,
        6,
    );
    let router = SessionRouter::new(
        auth.clone(),
        Arc::clone(&backend) as Arc<dyn ProfileStore>,
    );
    let events = EventService::new(
        Arc::clone(&backend) as Arc<dyn EventStore>,
        Arc::clone(&backend) as Arc<dyn RegistrationStore>,
        PosterUploader::new(Arc::clone(&storage) as Arc<dyn ObjectStorage>),
    );
    let registrations = RegistrationManager::new(
        Arc::clone(&backend) as Arc<dyn RegistrationStore>,
        Arc::clone(&backend) as Arc<dyn ProfileStore>,
    );

    TestEnv {
        backend,
        storage,
        auth,
        router,
        events,
        registrations,
    }
}

/// Sign up an account and complete its profile with the given role.
pub async fn signed_up(env: &TestEnv, email: &str, role: Role) -> Id {
    let login = env.router.sign_up(email, "hunter2-hunter2").await.unwrap();
    let identity = login.session.account_id;
    env.router
        .choose_role(
            identity,
            ProfileUpsert {
                full_name: "Asha Rao".into(),
                year: 2,
                role,
            },
        )
        .await
        .unwrap();
    identity
}

/// The next Monday strictly after today, so drafts always pass the
/// no-past-dates check with a known weekday.
pub fn next_monday() -> NaiveDate {
    let mut date = Utc::now().date_naive().succ_opt().unwrap();
    while date.weekday() != Weekday::Mon {
        date = date.succ_opt().unwrap();
    }
    date
}

pub fn draft(event_date: NaiveDate) -> EventDraft {
    EventDraft {
        name: "Hack Night".into(),
        club: "CS Club".into(),
        event_date,
        venue: "Lab 3".into(),
        description: "An all-night hackathon.".into(),
    }
}

pub fn form(name: &str, year: i16) -> RegistrationForm {
    RegistrationForm {
        full_name: name.into(),
        year,
        branch: Branch::Cse,
        expectations: None,
    }
}
