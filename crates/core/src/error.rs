use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed on '{field}': {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Duplicate {entity} {field}: {message}")]
    UniqueViolation {
        entity: &'static str,
        field: &'static str,
        message: String,
    },

    #[error("Cascade delete of {entity} {id} failed: {message}")]
    CascadeDelete {
        entity: &'static str,
        id: DbId,
        message: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a field-level validation failure.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// The offending field, for variants that carry one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } | Self::UniqueViolation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Whether the caller can recover by correcting its input.
    ///
    /// Cascade and internal failures indicate a broken store and are not.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::CascadeDelete { .. } | Self::Internal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_reports_field() {
        let err = CoreError::validation("email", "not an address");
        assert_eq!(err.field(), Some("email"));
        assert_eq!(
            err.to_string(),
            "Validation failed on 'email': not an address"
        );
    }

    #[test]
    fn unique_violation_reports_field() {
        let err = CoreError::UniqueViolation {
            entity: "Professor",
            field: "email",
            message: "already in use".into(),
        };
        assert_eq!(err.field(), Some("email"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn cascade_failure_is_not_recoverable() {
        let err = CoreError::CascadeDelete {
            entity: "Professor",
            id: 7,
            message: "orphaned courses".into(),
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.field(), None);
    }

    #[test]
    fn not_found_has_no_field() {
        let err = CoreError::NotFound {
            entity: "Student",
            id: 3,
        };
        assert_eq!(err.to_string(), "Entity not found: Student with id 3");
        assert_eq!(err.field(), None);
    }
}
