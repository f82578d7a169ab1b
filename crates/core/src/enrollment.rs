//! Enrollment status: a closed set of exactly two values.

use std::fmt;

use serde::Serialize;

use crate::error::CoreError;

/// Lifecycle of a student's enrollment in a course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    #[default]
    Active,
    Finished,
}

/// All valid status strings, as persisted.
const VALID_STATUS_STRINGS: &[&str] = &["active", "finished"];

impl EnrollmentStatus {
    /// Return the status as the lowercase string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Parse a status from user input.
    ///
    /// Case-insensitive; the one-letter codes `A` and `F` are accepted as
    /// aliases for records entered with the older short form.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" | "a" => Ok(Self::Active),
            "finished" | "f" => Ok(Self::Finished),
            _ => Err(CoreError::validation(
                "status",
                format!(
                    "invalid enrollment status '{s}'. Must be one of: {}",
                    VALID_STATUS_STRINGS.join(", ")
                ),
            )),
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for EnrollmentStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_canonical_names() {
        assert_eq!(EnrollmentStatus::parse("active").unwrap(), EnrollmentStatus::Active);
        assert_eq!(
            EnrollmentStatus::parse("Finished").unwrap(),
            EnrollmentStatus::Finished
        );
    }

    #[test]
    fn parses_short_codes() {
        assert_eq!(EnrollmentStatus::parse("A").unwrap(), EnrollmentStatus::Active);
        assert_eq!(EnrollmentStatus::parse("f").unwrap(), EnrollmentStatus::Finished);
    }

    #[test]
    fn rejects_anything_else() {
        for bad in ["", "pending", "X", "activo"] {
            assert_matches!(
                EnrollmentStatus::parse(bad),
                Err(CoreError::Validation { field: "status", .. })
            );
        }
    }

    #[test]
    fn defaults_to_active() {
        assert_eq!(EnrollmentStatus::default(), EnrollmentStatus::Active);
    }

    #[test]
    fn round_trips_through_storage_string() {
        for status in [EnrollmentStatus::Active, EnrollmentStatus::Finished] {
            let stored = status.as_str().to_string();
            assert_eq!(EnrollmentStatus::try_from(stored).unwrap(), status);
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_value(EnrollmentStatus::Finished).unwrap();
        assert_eq!(json, serde_json::json!("finished"));
    }
}
