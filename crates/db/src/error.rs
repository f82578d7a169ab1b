//! Store-level error type.
//!
//! Repository methods fail either with a domain error ([`CoreError`]) that
//! the caller can act on, or with a raw database error that it cannot.

use domus_core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience alias for repository return values.
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// The domain error, if this is one.
    pub fn as_core(&self) -> Option<&CoreError> {
        match self {
            Self::Core(core) => Some(core),
            Self::Database(_) => None,
        }
    }

    /// Reclassify a failed write as a uniqueness violation on `field`.
    ///
    /// Repositories check uniqueness before writing; this covers the window
    /// between the check and the write, where the schema constraint fires
    /// instead. Other database errors pass through unchanged.
    pub fn unique_on(err: sqlx::Error, entity: &'static str, field: &'static str) -> Self {
        let is_unique = err
            .as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation());
        if is_unique {
            Self::Core(CoreError::UniqueViolation {
                entity,
                field,
                message: format!("{entity} with this {field} already exists"),
            })
        } else {
            Self::Database(err)
        }
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(core) => core,
            StoreError::Database(db) => CoreError::Internal(db.to_string()),
        }
    }
}
