//! Repository for the `professors` table.

use domus_core::error::CoreError;
use domus_core::types::DbId;

use super::support::{self, CascadeTarget, Dependent};
use crate::error::{StoreError, StoreResult};
use crate::models::professor::{CreateProfessor, Professor, UpdateProfessor};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email";

/// Deleting a professor removes their courses, and with them every
/// enrollment in those courses.
const CASCADE: CascadeTarget = CascadeTarget {
    entity: "Professor",
    table: "professors",
    key: "id",
    dependents: &[
        Dependent::direct("courses", "professor_id = $1"),
        Dependent {
            table: "enrollments",
            owned_by: "course_id IN (SELECT id FROM courses WHERE professor_id = $1)",
            orphaned: "course_id NOT IN (SELECT id FROM courses)",
        },
    ],
};

/// Provides CRUD operations for professors.
pub struct ProfessorRepo;

impl ProfessorRepo {
    /// Insert a new professor. The email must not belong to another professor.
    pub async fn create(pool: &DbPool, input: &CreateProfessor) -> StoreResult<Professor> {
        input.validate()?;
        let email = input.email.trim();
        let mut tx = pool.begin().await?;
        support::ensure_email_free(&mut *tx, "professors", "Professor", email, 0).await?;

        let query = format!(
            "INSERT INTO professors (name, email)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let professor = sqlx::query_as::<_, Professor>(&query)
            .bind(input.name.trim())
            .bind(email)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| StoreError::unique_on(e, "Professor", "email"))?;

        tx.commit().await?;
        tracing::debug!(professor_id = professor.id, "Created professor");
        Ok(professor)
    }

    /// Find a professor by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<Professor>> {
        let query = format!("SELECT {COLUMNS} FROM professors WHERE id = $1");
        let professor = sqlx::query_as::<_, Professor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(professor)
    }

    /// Fetch a professor by ID, failing with `NotFound` if absent.
    pub async fn get(pool: &DbPool, id: DbId) -> StoreResult<Professor> {
        Self::find_by_id(pool, id).await?.ok_or_else(|| {
            CoreError::NotFound {
                entity: "Professor",
                id,
            }
            .into()
        })
    }

    /// List all professors ordered by name.
    pub async fn list(pool: &DbPool) -> StoreResult<Vec<Professor>> {
        let query = format!("SELECT {COLUMNS} FROM professors ORDER BY name, id");
        let professors = sqlx::query_as::<_, Professor>(&query)
            .fetch_all(pool)
            .await?;
        Ok(professors)
    }

    /// Case-insensitive substring search on name or email.
    pub async fn search(pool: &DbPool, term: &str) -> StoreResult<Vec<Professor>> {
        let query = format!(
            "SELECT {COLUMNS} FROM professors
             WHERE name LIKE $1 ESCAPE '\\' OR email LIKE $1 ESCAPE '\\'
             ORDER BY name, id"
        );
        let professors = sqlx::query_as::<_, Professor>(&query)
            .bind(support::like_pattern(term))
            .fetch_all(pool)
            .await?;
        Ok(professors)
    }

    /// Replace a professor's name and email.
    ///
    /// The email may stay the same but must not collide with another
    /// professor; on collision nothing is written.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateProfessor,
    ) -> StoreResult<Professor> {
        input.validate()?;
        let email = input.email.trim();
        let mut tx = pool.begin().await?;
        support::require_found(&mut *tx, "professors", "Professor", id).await?;
        support::ensure_email_free(&mut *tx, "professors", "Professor", email, id).await?;

        let query = format!(
            "UPDATE professors SET name = $2, email = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let professor = sqlx::query_as::<_, Professor>(&query)
            .bind(id)
            .bind(input.name.trim())
            .bind(email)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| StoreError::unique_on(e, "Professor", "email"))?;

        tx.commit().await?;
        Ok(professor)
    }

    /// Delete a professor together with their courses and those courses'
    /// enrollments.
    pub async fn delete(pool: &DbPool, id: DbId) -> StoreResult<()> {
        support::delete_cascading(pool, &CASCADE, id).await
    }

    pub async fn count(pool: &DbPool) -> StoreResult<i64> {
        Ok(support::count_all(pool, "professors").await?)
    }
}
