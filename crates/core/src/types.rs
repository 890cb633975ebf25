/// Primary keys are BIGSERIAL on the PostgreSQL side.
pub type DbId = i64;

/// All timestamps are stored and serialized as UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
