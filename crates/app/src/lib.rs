//! CampusBuzz application services.
//!
//! The seam between a screen layer and the platform: the auth service,
//! profile resolver, session router, event service, and registration
//! manager. Screens never talk to a store or to object storage directly --
//! everything goes through the services here, which are written against the
//! port traits in `campusbuzz-core` and wired to PostgreSQL and object
//! storage by [`config`] and the constructors in each module.

pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod events;
pub mod profile;
pub mod registrations;
pub mod router;
pub mod telemetry;
