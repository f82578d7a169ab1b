//! Category entity model and DTOs.

use domus_core::error::CoreError;
use domus_core::types::DbId;
use domus_core::validation::{require_text, MAX_NAME_LEN};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}

/// Full-record update.
pub type UpdateCategory = CreateCategory;

impl CreateCategory {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("name", &self.name, MAX_NAME_LEN)
    }
}
