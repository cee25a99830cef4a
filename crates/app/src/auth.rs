//! The auth service: sign-up, password sign-in, session lookup, sign-out.
//!
//! Passwords are hashed with Argon2id (PHC string format, random salt via
//! [`OsRng`]) and never stored or logged in plaintext. Session tokens are
//! opaque random strings; only their SHA-256 hex digest is persisted, so a
//! database leak does not compromise active sessions. The plaintext token is
//! what the device persists across launches.

use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::Utc;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use campusbuzz_core::error::CoreError;
use campusbuzz_core::store::{AccountStore, SessionStore};
use campusbuzz_core::types::{Id, Timestamp};

/// A live login session as handed to the device.
#[derive(Debug, Clone)]
pub struct Session {
    pub account_id: Id,
    /// Plaintext session token. Persist on the device; never stored server-side.
    pub token: String,
    pub expires_at: Timestamp,
}

/// Authentication operations over the account and session stores.
#[derive(Clone)]
pub struct AuthService {
    accounts: Arc<dyn AccountStore>,
    sessions: Arc<dyn SessionStore>,
    session_ttl: chrono::Duration,
    min_password_len: usize,
}

impl AuthService {
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        sessions: Arc<dyn SessionStore>,
        session_ttl_days: i64,
        min_password_len: usize,
    ) -> Self {
        Self {
            accounts,
            sessions,
            session_ttl: chrono::Duration::days(session_ttl_days),
            min_password_len,
        }
    }

    /// Create an account and sign it in.
    ///
    /// A duplicate email surfaces as [`CoreError::Conflict`]. The new
    /// account has no profile yet; the caller lands in the role gate.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Session, CoreError> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(CoreError::Validation("A valid email is required".into()));
        }
        if password.len() < self.min_password_len {
            return Err(CoreError::Validation(format!(
                "Password must be at least {} characters long",
                self.min_password_len
            )));
        }

        let hash = hash_password(password)?;
        let account = self.accounts.create(email, &hash).await?;
        tracing::info!(account_id = %account.id, "Account created");

        self.issue_session(account.id).await
    }

    /// Sign in with email + password.
    ///
    /// Bad credentials are reported without revealing which half was wrong.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, CoreError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(CoreError::Validation(
                "Email and password are required".into(),
            ));
        }

        let account = self
            .accounts
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| CoreError::Unauthorized("Invalid email or password".into()))?;

        if !verify_password(password, &account.password_hash)? {
            return Err(CoreError::Unauthorized("Invalid email or password".into()));
        }

        tracing::info!(account_id = %account.id, "Signed in");
        self.issue_session(account.id).await
    }

    /// Resolve a persisted token to the identity it belongs to.
    ///
    /// `None` means no active session (expired, revoked, or unknown token) --
    /// the launch path treats that as `Unauthenticated`, not as an error.
    pub async fn get_session(&self, token: &str) -> Result<Option<Id>, CoreError> {
        let session = self.sessions.find_active(&hash_token(token)).await?;
        Ok(session.map(|s| s.account_id))
    }

    /// Revoke the session for a token. Signing out an already-dead session
    /// is a no-op.
    pub async fn sign_out(&self, token: &str) -> Result<(), CoreError> {
        self.sessions.revoke(&hash_token(token)).await?;
        Ok(())
    }

    async fn issue_session(&self, account_id: Id) -> Result<Session, CoreError> {
        let token = Uuid::new_v4().to_string();
        let expires_at = Utc::now() + self.session_ttl;
        self.sessions
            .create(account_id, &hash_token(&token), expires_at)
            .await?;
        Ok(Session {
            account_id,
            token,
            expires_at,
        })
    }
}

/// Hash a plaintext password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, CoreError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default(); // Argon2id with default params
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| CoreError::Internal(format!("Password hashing error: {err}")))?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted hash.
///
/// Returns `Ok(false)` on a mismatch; only malformed hashes are errors.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, CoreError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|err| CoreError::Internal(format!("Malformed password hash: {err}")))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(err) => Err(CoreError::Internal(format!(
            "Password verification error: {err}"
        ))),
    }
}

/// SHA-256 hex digest of a session token.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
