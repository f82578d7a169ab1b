/// All database primary keys are SQLite INTEGER PRIMARY KEY (rowid aliases).
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (event dates, enrollment dates) carry no time zone.
pub type Date = chrono::NaiveDate;
