//! Repository for the `students` table.

use domus_core::error::CoreError;
use domus_core::types::DbId;

use super::support::{self, CascadeTarget, Dependent};
use crate::error::{StoreError, StoreResult};
use crate::models::student::{CreateStudent, Student, UpdateStudent};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email";

/// Deleting a student removes their profile and enrollments.
const CASCADE: CascadeTarget = CascadeTarget {
    entity: "Student",
    table: "students",
    key: "id",
    dependents: &[
        Dependent::direct("profiles", "student_id = $1"),
        Dependent::direct("enrollments", "student_id = $1"),
    ],
};

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student. The email must not belong to another student.
    pub async fn create(pool: &DbPool, input: &CreateStudent) -> StoreResult<Student> {
        input.validate()?;
        let email = input.email.trim();
        let mut tx = pool.begin().await?;
        support::ensure_email_free(&mut *tx, "students", "Student", email, 0).await?;

        let query = format!(
            "INSERT INTO students (name, email)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let student = sqlx::query_as::<_, Student>(&query)
            .bind(input.name.trim())
            .bind(email)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| StoreError::unique_on(e, "Student", "email"))?;

        tx.commit().await?;
        tracing::debug!(student_id = student.id, "Created student");
        Ok(student)
    }

    /// Find a student by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<Student>> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        let student = sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(student)
    }

    /// Fetch a student by ID, failing with `NotFound` if absent.
    pub async fn get(pool: &DbPool, id: DbId) -> StoreResult<Student> {
        Self::find_by_id(pool, id).await?.ok_or_else(|| {
            CoreError::NotFound {
                entity: "Student",
                id,
            }
            .into()
        })
    }

    /// List all students ordered by name.
    pub async fn list(pool: &DbPool) -> StoreResult<Vec<Student>> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY name, id");
        let students = sqlx::query_as::<_, Student>(&query)
            .fetch_all(pool)
            .await?;
        Ok(students)
    }

    /// Case-insensitive substring search on name or email.
    pub async fn search(pool: &DbPool, term: &str) -> StoreResult<Vec<Student>> {
        let query = format!(
            "SELECT {COLUMNS} FROM students
             WHERE name LIKE $1 ESCAPE '\\' OR email LIKE $1 ESCAPE '\\'
             ORDER BY name, id"
        );
        let students = sqlx::query_as::<_, Student>(&query)
            .bind(support::like_pattern(term))
            .fetch_all(pool)
            .await?;
        Ok(students)
    }

    /// Replace a student's name and email.
    ///
    /// The email may stay the same but must not collide with another
    /// student; on collision nothing is written.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> StoreResult<Student> {
        input.validate()?;
        let email = input.email.trim();
        let mut tx = pool.begin().await?;
        support::require_found(&mut *tx, "students", "Student", id).await?;
        support::ensure_email_free(&mut *tx, "students", "Student", email, id).await?;

        let query = format!(
            "UPDATE students SET name = $2, email = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let student = sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(input.name.trim())
            .bind(email)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| StoreError::unique_on(e, "Student", "email"))?;

        tx.commit().await?;
        Ok(student)
    }

    /// Delete a student together with their profile and enrollments.
    /// Other students' rows are untouched.
    pub async fn delete(pool: &DbPool, id: DbId) -> StoreResult<()> {
        support::delete_cascading(pool, &CASCADE, id).await
    }

    /// Students enrolled in a course, ordered by name.
    pub async fn list_by_course(pool: &DbPool, course_id: DbId) -> StoreResult<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT s.id, s.name, s.email
             FROM students s
             JOIN enrollments en ON en.student_id = s.id
             WHERE en.course_id = $1
             ORDER BY s.name, s.id",
        )
        .bind(course_id)
        .fetch_all(pool)
        .await?;
        Ok(students)
    }

    pub async fn count(pool: &DbPool) -> StoreResult<i64> {
        Ok(support::count_all(pool, "students").await?)
    }
}
