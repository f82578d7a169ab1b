//! Student entity model and DTOs.

use domus_core::error::CoreError;
use domus_core::types::DbId;
use domus_core::validation::{require_text, validate_email, MAX_NAME_LEN};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `students` table. `email` is unique (case-insensitive).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

/// DTO for creating a student.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    pub name: String,
    pub email: String,
}

/// Full-record update.
pub type UpdateStudent = CreateStudent;

impl CreateStudent {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("name", &self.name, MAX_NAME_LEN)?;
        validate_email("email", &self.email)
    }
}
