//! Repository for the `enrollments` table.

use chrono::Utc;
use domus_core::enrollment::EnrollmentStatus;
use domus_core::error::CoreError;
use domus_core::types::DbId;
use sqlx::sqlite::SqliteExecutor;

use super::support::{self, CascadeTarget};
use crate::error::{StoreError, StoreResult};
use crate::models::enrollment::{
    CreateEnrollment, Enrollment, EnrollmentFilter, EnrollmentOutcome, UpdateEnrollment,
};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_id, course_id, enrolled_on, status, final_grade";

const ORDER: &str = "ORDER BY enrolled_on DESC, id";

const CASCADE: CascadeTarget = CascadeTarget {
    entity: "Enrollment",
    table: "enrollments",
    key: "id",
    dependents: &[],
};

/// Provides CRUD operations for enrollments.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Enroll a student in a course.
    ///
    /// Both must exist, and the pair must not already be enrolled. The
    /// enrollment date is today.
    pub async fn create(pool: &DbPool, input: &CreateEnrollment) -> StoreResult<Enrollment> {
        let status = input.validate()?;
        let mut tx = pool.begin().await?;
        check_references(&mut tx, input.student_id, input.course_id).await?;
        ensure_pair_free(&mut *tx, input.student_id, input.course_id, 0).await?;

        let query = format!(
            "INSERT INTO enrollments (student_id, course_id, enrolled_on, status, final_grade)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let enrollment = sqlx::query_as::<_, Enrollment>(&query)
            .bind(input.student_id)
            .bind(input.course_id)
            .bind(Utc::now().date_naive())
            .bind(status.as_str())
            .bind(input.final_grade)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| StoreError::unique_on(e, "Enrollment", "course_id"))?;

        tx.commit().await?;
        tracing::debug!(
            enrollment_id = enrollment.id,
            student_id = enrollment.student_id,
            course_id = enrollment.course_id,
            "Created enrollment"
        );
        Ok(enrollment)
    }

    /// Find an enrollment by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<Enrollment>> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE id = $1");
        let enrollment = sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(enrollment)
    }

    /// Fetch an enrollment by ID, failing with `NotFound` if absent.
    pub async fn get(pool: &DbPool, id: DbId) -> StoreResult<Enrollment> {
        Self::find_by_id(pool, id).await?.ok_or_else(|| {
            CoreError::NotFound {
                entity: "Enrollment",
                id,
            }
            .into()
        })
    }

    /// List all enrollments, most recent first.
    pub async fn list(pool: &DbPool) -> StoreResult<Vec<Enrollment>> {
        let query = format!("SELECT {COLUMNS} FROM enrollments {ORDER}");
        let enrollments = sqlx::query_as::<_, Enrollment>(&query)
            .fetch_all(pool)
            .await?;
        Ok(enrollments)
    }

    /// List enrollments matching every filter that is set.
    pub async fn list_filtered(
        pool: &DbPool,
        filter: &EnrollmentFilter,
    ) -> StoreResult<Vec<Enrollment>> {
        let status = filter
            .status
            .as_deref()
            .map(EnrollmentStatus::parse)
            .transpose()?;

        let query = format!(
            "SELECT {COLUMNS} FROM enrollments
             WHERE ($1 IS NULL OR status = $1)
               AND ($2 IS NULL OR course_id = $2)
               AND ($3 IS NULL OR student_id = $3)
             {ORDER}"
        );
        let enrollments = sqlx::query_as::<_, Enrollment>(&query)
            .bind(status.as_ref().map(EnrollmentStatus::as_str))
            .bind(filter.course_id)
            .bind(filter.student_id)
            .fetch_all(pool)
            .await?;
        Ok(enrollments)
    }

    /// A student's enrollments, most recent first.
    pub async fn list_by_student(pool: &DbPool, student_id: DbId) -> StoreResult<Vec<Enrollment>> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE student_id = $1 {ORDER}");
        let enrollments = sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await?;
        Ok(enrollments)
    }

    /// A course's enrollments, most recent first.
    pub async fn list_by_course(pool: &DbPool, course_id: DbId) -> StoreResult<Vec<Enrollment>> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE course_id = $1 {ORDER}");
        let enrollments = sqlx::query_as::<_, Enrollment>(&query)
            .bind(course_id)
            .fetch_all(pool)
            .await?;
        Ok(enrollments)
    }

    /// Replace an enrollment's student, course, status and grade.
    ///
    /// The enrollment date is kept. The new pair must not collide with
    /// another enrollment.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateEnrollment,
    ) -> StoreResult<Enrollment> {
        let status = input.validate()?;
        let mut tx = pool.begin().await?;
        support::require_found(&mut *tx, "enrollments", "Enrollment", id).await?;
        check_references(&mut tx, input.student_id, input.course_id).await?;
        ensure_pair_free(&mut *tx, input.student_id, input.course_id, id).await?;

        let query = format!(
            "UPDATE enrollments
             SET student_id = $2, course_id = $3, status = $4, final_grade = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let enrollment = sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .bind(input.student_id)
            .bind(input.course_id)
            .bind(status.as_str())
            .bind(input.final_grade)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| StoreError::unique_on(e, "Enrollment", "course_id"))?;

        tx.commit().await?;
        Ok(enrollment)
    }

    /// Record the status and final grade of an enrollment.
    pub async fn set_outcome(
        pool: &DbPool,
        id: DbId,
        outcome: &EnrollmentOutcome,
    ) -> StoreResult<Enrollment> {
        let status = outcome.validate()?;
        let query = format!(
            "UPDATE enrollments SET status = $2, final_grade = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let enrollment = sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .bind(status.as_str())
            .bind(outcome.final_grade)
            .fetch_optional(pool)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Enrollment",
                id,
            })?;

        tracing::debug!(enrollment_id = id, status = %status, "Recorded enrollment outcome");
        Ok(enrollment)
    }

    pub async fn delete(pool: &DbPool, id: DbId) -> StoreResult<()> {
        support::delete_cascading(pool, &CASCADE, id).await
    }

    pub async fn count(pool: &DbPool) -> StoreResult<i64> {
        Ok(support::count_all(pool, "enrollments").await?)
    }
}

async fn check_references(
    conn: &mut sqlx::SqliteConnection,
    student_id: DbId,
    course_id: DbId,
) -> StoreResult<()> {
    support::require_reference(&mut *conn, "students", "Student", "student_id", student_id)
        .await?;
    support::require_reference(&mut *conn, "courses", "Course", "course_id", course_id).await
}

/// Fail with `UniqueViolation` if another enrollment holds the pair.
async fn ensure_pair_free<'e, E>(
    executor: E,
    student_id: DbId,
    course_id: DbId,
    exclude_id: DbId,
) -> StoreResult<()>
where
    E: SqliteExecutor<'e>,
{
    let taken: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM enrollments
         WHERE student_id = $1 AND course_id = $2 AND id <> $3",
    )
    .bind(student_id)
    .bind(course_id)
    .bind(exclude_id)
    .fetch_one(executor)
    .await?;
    if taken > 0 {
        return Err(CoreError::UniqueViolation {
            entity: "Enrollment",
            field: "course_id",
            message: format!("student {student_id} is already enrolled in course {course_id}"),
        }
        .into());
    }
    Ok(())
}
