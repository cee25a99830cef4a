//! Row models.
//!
//! Each submodule contains a `FromRow` struct matching the database row plus
//! a conversion into the domain type from `campusbuzz-core`. Conversions
//! that parse enum columns are fallible; a value the CHECK constraints
//! should have prevented surfaces as [`CoreError::Internal`].
//!
//! [`CoreError::Internal`]: campusbuzz_core::error::CoreError

pub mod account;
pub mod auth_session;
pub mod event;
pub mod profile;
pub mod registration;
