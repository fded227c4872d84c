/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Room numbers as printed on the door plate (e.g. `101`, `303`).
pub type RoomNumber = i32;
