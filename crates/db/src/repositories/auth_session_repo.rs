//! Repository for the `auth_sessions` table.

use sqlx::PgPool;
use uuid::Uuid;

use campusbuzz_core::types::Timestamp;

use crate::models::auth_session::AuthSessionRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, account_id, token_hash, expires_at, created_at";

/// Provides CRUD operations for login sessions.
pub struct AuthSessionRepo;

impl AuthSessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(
        pool: &PgPool,
        account_id: Uuid,
        token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<AuthSessionRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO auth_sessions (account_id, token_hash, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuthSessionRow>(&query)
            .bind(account_id)
            .bind(token_hash)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a session by token hash, excluding expired rows.
    pub async fn find_active(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<AuthSessionRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM auth_sessions
             WHERE token_hash = $1 AND expires_at > NOW()"
        );
        sqlx::query_as::<_, AuthSessionRow>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Delete the session with the given token hash.
    ///
    /// Returns `true` if a row was removed.
    pub async fn revoke(pool: &PgPool, token_hash: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM auth_sessions WHERE token_hash = $1")
            .bind(token_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete expired sessions. Returns the count of deleted rows.
    pub async fn cleanup_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM auth_sessions WHERE expires_at < NOW()")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
