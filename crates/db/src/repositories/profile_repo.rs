//! Repository for the `profiles` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::profile::ProfileRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, year, role";

/// Provides CRUD operations for profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Find a profile by identity. `None` is the legitimate
    /// "no profile yet" state, not an error.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ProfileRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, ProfileRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace the profile row for an identity.
    ///
    /// The primary key equals the account id, so the upsert can never
    /// produce a second row for the same identity.
    pub async fn upsert(
        pool: &PgPool,
        id: Uuid,
        full_name: &str,
        year: i16,
        role: &str,
    ) -> Result<ProfileRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (id, full_name, year, role)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE
                 SET full_name = EXCLUDED.full_name,
                     year = EXCLUDED.year,
                     role = EXCLUDED.role
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProfileRow>(&query)
            .bind(id)
            .bind(full_name)
            .bind(year)
            .bind(role)
            .fetch_one(pool)
            .await
    }

    /// Refresh `full_name`/`year` without touching the role.
    ///
    /// Returns `true` if a row was updated.
    pub async fn update_basic(
        pool: &PgPool,
        id: Uuid,
        full_name: &str,
        year: i16,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE profiles SET full_name = $2, year = $3 WHERE id = $1")
            .bind(id)
            .bind(full_name)
            .bind(year)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
