/// All entity identifiers (accounts, profiles, events, registrations) are UUIDs.
pub type Id = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
