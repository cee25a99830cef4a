//! CampusBuzz domain core.
//!
//! Pure domain types and rules for the campus event platform: entities,
//! validation, the session-router state machine, year-bucket statistics,
//! and the storage port traits the service layer is written against.
//! No I/O happens in this crate.

pub mod auth;
pub mod error;
pub mod event;
pub mod profile;
pub mod registration;
pub mod schedule;
pub mod session;
pub mod stats;
pub mod store;
pub mod types;
