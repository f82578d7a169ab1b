//! Repository for the `courses` table.

use domus_core::error::CoreError;
use domus_core::types::DbId;

use super::support::{self, CascadeTarget, Dependent};
use crate::error::StoreResult;
use crate::models::course::{Course, CreateCourse, UpdateCourse};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, professor_id";

const CASCADE: CascadeTarget = CascadeTarget {
    entity: "Course",
    table: "courses",
    key: "id",
    dependents: &[Dependent::direct("enrollments", "course_id = $1")],
};

/// Provides CRUD operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course owned by an existing professor.
    pub async fn create(pool: &DbPool, input: &CreateCourse) -> StoreResult<Course> {
        input.validate()?;
        let mut tx = pool.begin().await?;
        support::require_reference(
            &mut *tx,
            "professors",
            "Professor",
            "professor_id",
            input.professor_id,
        )
        .await?;

        let query = format!(
            "INSERT INTO courses (name, description, professor_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let course = sqlx::query_as::<_, Course>(&query)
            .bind(input.name.trim())
            .bind(input.description.trim())
            .bind(input.professor_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(
            course_id = course.id,
            professor_id = course.professor_id,
            "Created course"
        );
        Ok(course)
    }

    /// Find a course by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<Course>> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        let course = sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(course)
    }

    /// Fetch a course by ID, failing with `NotFound` if absent.
    pub async fn get(pool: &DbPool, id: DbId) -> StoreResult<Course> {
        Self::find_by_id(pool, id).await?.ok_or_else(|| {
            CoreError::NotFound {
                entity: "Course",
                id,
            }
            .into()
        })
    }

    /// List all courses in insertion order.
    pub async fn list(pool: &DbPool) -> StoreResult<Vec<Course>> {
        let query = format!("SELECT {COLUMNS} FROM courses ORDER BY id");
        let courses = sqlx::query_as::<_, Course>(&query).fetch_all(pool).await?;
        Ok(courses)
    }

    /// Case-insensitive substring search on name or description.
    pub async fn search(pool: &DbPool, term: &str) -> StoreResult<Vec<Course>> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses
             WHERE name LIKE $1 ESCAPE '\\' OR description LIKE $1 ESCAPE '\\'
             ORDER BY id"
        );
        let courses = sqlx::query_as::<_, Course>(&query)
            .bind(support::like_pattern(term))
            .fetch_all(pool)
            .await?;
        Ok(courses)
    }

    /// Courses owned by a professor, in insertion order.
    pub async fn list_by_professor(pool: &DbPool, professor_id: DbId) -> StoreResult<Vec<Course>> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE professor_id = $1 ORDER BY id");
        let courses = sqlx::query_as::<_, Course>(&query)
            .bind(professor_id)
            .fetch_all(pool)
            .await?;
        Ok(courses)
    }

    /// Courses a student is enrolled in, derived through `enrollments`.
    pub async fn list_by_student(pool: &DbPool, student_id: DbId) -> StoreResult<Vec<Course>> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT c.id, c.name, c.description, c.professor_id
             FROM courses c
             JOIN enrollments en ON en.course_id = c.id
             WHERE en.student_id = $1
             ORDER BY c.id",
        )
        .bind(student_id)
        .fetch_all(pool)
        .await?;
        Ok(courses)
    }

    /// Replace a course's fields. The new owner must exist.
    pub async fn update(pool: &DbPool, id: DbId, input: &UpdateCourse) -> StoreResult<Course> {
        input.validate()?;
        let mut tx = pool.begin().await?;
        support::require_found(&mut *tx, "courses", "Course", id).await?;
        support::require_reference(
            &mut *tx,
            "professors",
            "Professor",
            "professor_id",
            input.professor_id,
        )
        .await?;

        let query = format!(
            "UPDATE courses SET name = $2, description = $3, professor_id = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let course = sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(input.name.trim())
            .bind(input.description.trim())
            .bind(input.professor_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(course)
    }

    /// Delete a course and its enrollments.
    pub async fn delete(pool: &DbPool, id: DbId) -> StoreResult<()> {
        support::delete_cascading(pool, &CASCADE, id).await
    }

    pub async fn count(pool: &DbPool) -> StoreResult<i64> {
        Ok(support::count_all(pool, "courses").await?)
    }
}
