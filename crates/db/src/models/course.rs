//! Course entity model and DTOs.

use domus_core::error::CoreError;
use domus_core::types::DbId;
use domus_core::validation::{require_text, validate_reference, MAX_NAME_LEN};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

const MAX_DESCRIPTION_LEN: usize = 10_000;

/// A row from the `courses` table. Owned by exactly one professor.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub professor_id: DbId,
}

/// DTO for creating a course.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourse {
    pub name: String,
    pub description: String,
    pub professor_id: DbId,
}

/// Full-record update. Moving a course to another professor is allowed.
pub type UpdateCourse = CreateCourse;

impl CreateCourse {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("name", &self.name, MAX_NAME_LEN)?;
        require_text("description", &self.description, MAX_DESCRIPTION_LEN)?;
        validate_reference("professor_id", self.professor_id)
    }
}
