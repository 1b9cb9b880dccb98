/// Record identifiers are opaque UUID v4 strings assigned by the store.
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (tour dates, birth dates, expense dates).
pub type Date = chrono::NaiveDate;

/// Currency amounts in rupees.
pub type Money = f64;
