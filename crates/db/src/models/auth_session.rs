use sqlx::FromRow;
use uuid::Uuid;

use campusbuzz_core::auth::AuthSession;
use campusbuzz_core::types::Timestamp;

/// Row from the `auth_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct AuthSessionRow {
    pub id: Uuid,
    pub account_id: Uuid,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

impl From<AuthSessionRow> for AuthSession {
    fn from(row: AuthSessionRow) -> Self {
        AuthSession {
            id: row.id,
            account_id: row.account_id,
            token_hash: row.token_hash,
            expires_at: row.expires_at,
            created_at: row.created_at,
        }
    }
}
