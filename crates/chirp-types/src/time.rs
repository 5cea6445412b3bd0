use chrono::{DateTime, Utc};

/// UTC wall-clock timestamp attached to every record on creation.
pub type Timestamp = DateTime<Utc>;

/// The current time.
pub fn now() -> Timestamp {
    Utc::now()
}
