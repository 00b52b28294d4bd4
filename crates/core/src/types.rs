/// Movie identifiers are UUIDs, opaque to clients.
pub type MovieId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
