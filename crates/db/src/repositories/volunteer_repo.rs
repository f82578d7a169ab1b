//! Repository for the `volunteers` table.

use chrono::Utc;
use domus_core::error::CoreError;
use domus_core::types::DbId;

use super::support::{self, CascadeTarget, Dependent};
use crate::error::StoreResult;
use crate::models::event::Event;
use crate::models::volunteer::{CreateVolunteer, UpdateVolunteer, Volunteer};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, registered_at";

const CASCADE: CascadeTarget = CascadeTarget {
    entity: "Volunteer",
    table: "volunteers",
    key: "id",
    dependents: &[Dependent::direct("event_volunteers", "volunteer_id = $1")],
};

/// Provides CRUD operations for volunteers.
pub struct VolunteerRepo;

impl VolunteerRepo {
    /// Insert a new volunteer, stamping `registered_at` with the current time.
    pub async fn create(pool: &DbPool, input: &CreateVolunteer) -> StoreResult<Volunteer> {
        input.validate()?;
        let query = format!(
            "INSERT INTO volunteers (name, email, phone, registered_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let volunteer = sqlx::query_as::<_, Volunteer>(&query)
            .bind(input.name.trim())
            .bind(input.email.trim())
            .bind(input.phone())
            .bind(Utc::now())
            .fetch_one(pool)
            .await?;
        tracing::debug!(volunteer_id = volunteer.id, "Created volunteer");
        Ok(volunteer)
    }

    /// Find a volunteer by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<Volunteer>> {
        let query = format!("SELECT {COLUMNS} FROM volunteers WHERE id = $1");
        let volunteer = sqlx::query_as::<_, Volunteer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(volunteer)
    }

    /// Fetch a volunteer by ID, failing with `NotFound` if absent.
    pub async fn get(pool: &DbPool, id: DbId) -> StoreResult<Volunteer> {
        Self::find_by_id(pool, id).await?.ok_or_else(|| {
            CoreError::NotFound {
                entity: "Volunteer",
                id,
            }
            .into()
        })
    }

    /// List all volunteers, most recently registered first.
    pub async fn list(pool: &DbPool) -> StoreResult<Vec<Volunteer>> {
        let query =
            format!("SELECT {COLUMNS} FROM volunteers ORDER BY registered_at DESC, id DESC");
        let volunteers = sqlx::query_as::<_, Volunteer>(&query)
            .fetch_all(pool)
            .await?;
        Ok(volunteers)
    }

    /// Case-insensitive substring search on name or email.
    pub async fn search(pool: &DbPool, term: &str) -> StoreResult<Vec<Volunteer>> {
        let query = format!(
            "SELECT {COLUMNS} FROM volunteers
             WHERE name LIKE $1 ESCAPE '\\' OR email LIKE $1 ESCAPE '\\'
             ORDER BY registered_at DESC, id DESC"
        );
        let volunteers = sqlx::query_as::<_, Volunteer>(&query)
            .bind(support::like_pattern(term))
            .fetch_all(pool)
            .await?;
        Ok(volunteers)
    }

    /// Replace a volunteer's name, email and phone. `registered_at` is kept.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateVolunteer,
    ) -> StoreResult<Volunteer> {
        input.validate()?;
        let query = format!(
            "UPDATE volunteers SET name = $2, email = $3, phone = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Volunteer>(&query)
            .bind(id)
            .bind(input.name.trim())
            .bind(input.email.trim())
            .bind(input.phone())
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: "Volunteer",
                    id,
                }
                .into()
            })
    }

    /// Delete a volunteer. Event links go with it; the events stay.
    pub async fn delete(pool: &DbPool, id: DbId) -> StoreResult<()> {
        support::delete_cascading(pool, &CASCADE, id).await
    }

    /// Events this volunteer has joined, most recent date first.
    pub async fn list_events(pool: &DbPool, volunteer_id: DbId) -> StoreResult<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT e.id, e.title, e.description, e.date
             FROM events e
             JOIN event_volunteers ev ON ev.event_id = e.id
             WHERE ev.volunteer_id = $1
             ORDER BY e.date DESC, e.id DESC",
        )
        .bind(volunteer_id)
        .fetch_all(pool)
        .await?;
        Ok(events)
    }

    pub async fn count(pool: &DbPool) -> StoreResult<i64> {
        Ok(support::count_all(pool, "volunteers").await?)
    }
}
