//! Repository for the `events` table and the `event_volunteers` link table.

use domus_core::error::CoreError;
use domus_core::types::DbId;
use sqlx::SqliteConnection;

use super::support::{self, CascadeTarget, Dependent};
use crate::error::StoreResult;
use crate::models::event::{CreateEvent, Event, UpdateEvent, VolunteeringTotals};
use crate::models::volunteer::Volunteer;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, date";

const CASCADE: CascadeTarget = CascadeTarget {
    entity: "Event",
    table: "events",
    key: "id",
    dependents: &[Dependent::direct("event_volunteers", "event_id = $1")],
};

/// Provides CRUD operations for events and their volunteer links.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, linking the given volunteers in the same transaction.
    pub async fn create(pool: &DbPool, input: &CreateEvent) -> StoreResult<Event> {
        input.validate()?;
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO events (title, description, date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let event = sqlx::query_as::<_, Event>(&query)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(input.date)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(ids) = &input.volunteer_ids {
            replace_volunteers(&mut tx, event.id, ids).await?;
        }

        tx.commit().await?;
        tracing::debug!(event_id = event.id, "Created event");
        Ok(event)
    }

    /// Find an event by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<Event>> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        let event = sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(event)
    }

    /// Fetch an event by ID, failing with `NotFound` if absent.
    pub async fn get(pool: &DbPool, id: DbId) -> StoreResult<Event> {
        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CoreError::NotFound { entity: "Event", id }.into())
    }

    /// List all events, latest date first.
    pub async fn list(pool: &DbPool) -> StoreResult<Vec<Event>> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY date DESC, id DESC");
        let events = sqlx::query_as::<_, Event>(&query).fetch_all(pool).await?;
        Ok(events)
    }

    /// Case-insensitive substring search on title or description.
    pub async fn search(pool: &DbPool, term: &str) -> StoreResult<Vec<Event>> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE title LIKE $1 ESCAPE '\\' OR description LIKE $1 ESCAPE '\\'
             ORDER BY date DESC, id DESC"
        );
        let events = sqlx::query_as::<_, Event>(&query)
            .bind(support::like_pattern(term))
            .fetch_all(pool)
            .await?;
        Ok(events)
    }

    /// Replace an event's fields and, if given, its volunteer set.
    pub async fn update(pool: &DbPool, id: DbId, input: &UpdateEvent) -> StoreResult<Event> {
        input.validate()?;
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE events SET title = $2, description = $3, date = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let event = sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(input.date)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound { entity: "Event", id })?;

        if let Some(ids) = &input.volunteer_ids {
            replace_volunteers(&mut tx, id, ids).await?;
        }

        tx.commit().await?;
        Ok(event)
    }

    /// Delete an event. Volunteer links go with it; the volunteers stay.
    pub async fn delete(pool: &DbPool, id: DbId) -> StoreResult<()> {
        support::delete_cascading(pool, &CASCADE, id).await
    }

    // -----------------------------------------------------------------------
    // Event-volunteer links
    // -----------------------------------------------------------------------

    /// Link a volunteer to an event. Idempotent: returns `false` if already linked.
    pub async fn attach_volunteer(
        pool: &DbPool,
        event_id: DbId,
        volunteer_id: DbId,
    ) -> StoreResult<bool> {
        let mut tx = pool.begin().await?;
        support::require_found(&mut *tx, "events", "Event", event_id).await?;
        support::require_found(&mut *tx, "volunteers", "Volunteer", volunteer_id).await?;

        let result = sqlx::query(
            "INSERT INTO event_volunteers (event_id, volunteer_id)
             VALUES ($1, $2)
             ON CONFLICT (event_id, volunteer_id) DO NOTHING",
        )
        .bind(event_id)
        .bind(volunteer_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Unlink a volunteer from an event. Returns `false` if they were not linked.
    pub async fn detach_volunteer(
        pool: &DbPool,
        event_id: DbId,
        volunteer_id: DbId,
    ) -> StoreResult<bool> {
        let result =
            sqlx::query("DELETE FROM event_volunteers WHERE event_id = $1 AND volunteer_id = $2")
                .bind(event_id)
                .bind(volunteer_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace an event's whole volunteer set.
    pub async fn set_volunteers(
        pool: &DbPool,
        event_id: DbId,
        volunteer_ids: &[DbId],
    ) -> StoreResult<()> {
        let mut tx = pool.begin().await?;
        support::require_found(&mut *tx, "events", "Event", event_id).await?;
        replace_volunteers(&mut tx, event_id, volunteer_ids).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Volunteers linked to an event, ordered by name.
    pub async fn list_volunteers(pool: &DbPool, event_id: DbId) -> StoreResult<Vec<Volunteer>> {
        let volunteers = sqlx::query_as::<_, Volunteer>(
            "SELECT v.id, v.name, v.email, v.phone, v.registered_at
             FROM volunteers v
             JOIN event_volunteers ev ON ev.volunteer_id = v.id
             WHERE ev.event_id = $1
             ORDER BY v.name, v.id",
        )
        .bind(event_id)
        .fetch_all(pool)
        .await?;
        Ok(volunteers)
    }

    pub async fn count(pool: &DbPool) -> StoreResult<i64> {
        Ok(support::count_all(pool, "events").await?)
    }

    /// Volunteer and event totals for the dashboard.
    pub async fn totals(pool: &DbPool) -> StoreResult<VolunteeringTotals> {
        Ok(VolunteeringTotals {
            volunteers: support::count_all(pool, "volunteers").await?,
            events: support::count_all(pool, "events").await?,
        })
    }
}

/// Swap the event's link rows for exactly `volunteer_ids` (duplicates collapse).
async fn replace_volunteers(
    conn: &mut SqliteConnection,
    event_id: DbId,
    volunteer_ids: &[DbId],
) -> StoreResult<()> {
    sqlx::query("DELETE FROM event_volunteers WHERE event_id = $1")
        .bind(event_id)
        .execute(&mut *conn)
        .await?;

    for &volunteer_id in volunteer_ids {
        support::require_reference(
            &mut *conn,
            "volunteers",
            "Volunteer",
            "volunteer_ids",
            volunteer_id,
        )
        .await?;
        sqlx::query(
            "INSERT INTO event_volunteers (event_id, volunteer_id)
             VALUES ($1, $2)
             ON CONFLICT (event_id, volunteer_id) DO NOTHING",
        )
        .bind(event_id)
        .bind(volunteer_id)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}
