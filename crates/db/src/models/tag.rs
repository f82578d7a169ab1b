//! Tag entity model and DTOs.

use domus_core::error::CoreError;
use domus_core::types::DbId;
use domus_core::validation::{require_text, MAX_TAG_NAME_LEN};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tags` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a tag.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTag {
    pub name: String,
}

/// Full-record update.
pub type UpdateTag = CreateTag;

impl CreateTag {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("name", &self.name, MAX_TAG_NAME_LEN)
    }
}
