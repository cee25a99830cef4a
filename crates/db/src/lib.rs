//! PostgreSQL persistence for CampusBuzz.
//!
//! Row models, table repositories, and the [`campusbuzz_core::store`] port
//! implementations live here. Uniqueness invariants (one profile per
//! identity, one registration per participant-event pair) are enforced by
//! the schema; see `migrations/`.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use campusbuzz_core::error::CoreError;

pub mod models;
pub mod repositories;
pub mod stores;

/// Database connection pool type used across the workspace.
pub type DbPool = PgPool;

/// Create a connection pool for the given database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Map a sqlx error into the domain taxonomy.
///
/// Unique-constraint violations (PostgreSQL error code 23505) become
/// [`CoreError::Conflict`]; everything else is a [`CoreError::Transport`]
/// surfaced verbatim upward -- repositories never swallow infrastructure
/// errors.
pub(crate) fn map_db_err(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            let constraint = db_err.constraint().unwrap_or("unknown");
            return CoreError::Conflict(format!(
                "Duplicate value violates unique constraint: {constraint}"
            ));
        }
    }
    tracing::error!(error = %err, "Database error");
    CoreError::Transport(err.to_string())
}

/// `true` when the error is a unique-constraint violation.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505"))
}
