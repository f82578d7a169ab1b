//! Student profile model and DTOs (one-to-one with `students`).

use domus_core::error::CoreError;
use domus_core::types::DbId;
use domus_core::validation::{limit_text, validate_reference, MAX_LINK_LEN};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

const MAX_BIOGRAPHY_LEN: usize = 10_000;

/// A row from the `profiles` table. The student id is the primary key.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Profile {
    pub student_id: DbId,
    pub biography: String,
    /// Path of an already-stored photo; uploads are handled elsewhere.
    pub photo_path: Option<String>,
    pub social_links: String,
}

/// DTO for creating a profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfile {
    pub student_id: DbId,
    #[serde(default)]
    pub biography: String,
    pub photo_path: Option<String>,
    #[serde(default)]
    pub social_links: String,
}

impl CreateProfile {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_reference("student_id", self.student_id)?;
        validate_profile_fields(&self.biography, self.photo_path.as_deref(), &self.social_links)
    }
}

/// Full-record update. The owning student cannot change.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfile {
    #[serde(default)]
    pub biography: String,
    pub photo_path: Option<String>,
    #[serde(default)]
    pub social_links: String,
}

impl UpdateProfile {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_profile_fields(&self.biography, self.photo_path.as_deref(), &self.social_links)
    }
}

fn validate_profile_fields(
    biography: &str,
    photo_path: Option<&str>,
    social_links: &str,
) -> Result<(), CoreError> {
    limit_text("biography", biography, MAX_BIOGRAPHY_LEN)?;
    if let Some(path) = photo_path {
        limit_text("photo_path", path, MAX_LINK_LEN)?;
    }
    limit_text("social_links", social_links, MAX_LINK_LEN)
}
