//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument and return raw `sqlx`
//! results. Domain-error mapping happens in [`crate::stores`].

pub mod account_repo;
pub mod auth_session_repo;
pub mod event_repo;
pub mod profile_repo;
pub mod registration_repo;

pub use account_repo::AccountRepo;
pub use auth_session_repo::AuthSessionRepo;
pub use event_repo::EventRepo;
pub use profile_repo::ProfileRepo;
pub use registration_repo::RegistrationRepo;
