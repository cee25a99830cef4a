//! Account and session records backing the auth service.
//!
//! Passwords are stored only as Argon2id PHC hashes; session tokens are
//! stored only as SHA-256 hex digests. The plaintext token lives on the
//! device and is the sole proof of a session.

use crate::types::{Id, Timestamp};

/// A sign-up record.
///
/// Contains the password hash -- never serialize this outward.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Id,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// A persisted login session.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub id: Id,
    pub account_id: Id,
    /// SHA-256 hex digest of the opaque session token.
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}
