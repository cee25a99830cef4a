use sqlx::FromRow;
use uuid::Uuid;

use campusbuzz_core::error::CoreError;
use campusbuzz_core::profile::{Profile, Role};

/// Row from the `profiles` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub full_name: String,
    pub year: i16,
    pub role: Option<String>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = CoreError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let role = row.role.as_deref().map(Role::parse).transpose()?;
        Ok(Profile {
            id: row.id,
            full_name: row.full_name,
            year: row.year,
            role,
        })
    }
}
