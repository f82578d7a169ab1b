//! Professor entity model and DTOs.

use domus_core::error::CoreError;
use domus_core::types::DbId;
use domus_core::validation::{require_text, validate_email, MAX_NAME_LEN};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `professors` table. `email` is unique (case-insensitive).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Professor {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

/// DTO for creating a professor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfessor {
    pub name: String,
    pub email: String,
}

/// Full-record update.
pub type UpdateProfessor = CreateProfessor;

impl CreateProfessor {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("name", &self.name, MAX_NAME_LEN)?;
        validate_email("email", &self.email)
    }
}
