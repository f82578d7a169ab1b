//! Event entity model and DTOs.

use domus_core::error::CoreError;
use domus_core::types::{Date, DbId};
use domus_core::validation::{limit_text, require_text, validate_reference, MAX_TITLE_LEN};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Upper bound on the free-text description.
const MAX_DESCRIPTION_LEN: usize = 10_000;

/// A row from the `events` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub date: Date,
}

/// DTO for creating an event.
///
/// `volunteer_ids`, when present, becomes the event's volunteer set.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: Date,
    pub volunteer_ids: Option<Vec<DbId>>,
}

/// Full-record update. A `None` volunteer list leaves the links untouched;
/// `Some` replaces them.
pub type UpdateEvent = CreateEvent;

impl CreateEvent {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("title", &self.title, MAX_TITLE_LEN)?;
        limit_text("description", &self.description, MAX_DESCRIPTION_LEN)?;
        for id in self.volunteer_ids.iter().flatten() {
            validate_reference("volunteer_ids", *id)?;
        }
        Ok(())
    }
}

/// Volunteering dashboard totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VolunteeringTotals {
    pub volunteers: i64,
    pub events: i64,
}
