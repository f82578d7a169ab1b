//! Volunteer entity model and DTOs.

use domus_core::error::CoreError;
use domus_core::types::{DbId, Timestamp};
use domus_core::validation::{require_text, validate_email, validate_phone, MAX_NAME_LEN};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `volunteers` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Volunteer {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Set by the store on insert; updates never touch it.
    pub registered_at: Timestamp,
}

/// DTO for creating a volunteer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVolunteer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Full-record update: the same fields as [`CreateVolunteer`].
pub type UpdateVolunteer = CreateVolunteer;

impl CreateVolunteer {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("name", &self.name, MAX_NAME_LEN)?;
        validate_email("email", &self.email)?;
        validate_phone("phone", self.phone.as_deref())
    }

    /// The phone number as stored: trimmed, blank becomes `NULL`.
    pub fn phone(&self) -> Option<&str> {
        super::blank_to_none(self.phone.as_deref())
    }
}
