//! Enrollment entity model and DTOs.
//!
//! An enrollment links one student to one course. The `(student, course)`
//! pair is unique.

use domus_core::enrollment::EnrollmentStatus;
use domus_core::error::CoreError;
use domus_core::types::{Date, DbId};
use domus_core::validation::{validate_grade, validate_reference};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `enrollments` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub student_id: DbId,
    pub course_id: DbId,
    /// Set by the store on insert; updates never touch it.
    pub enrolled_on: Date,
    #[sqlx(try_from = "String")]
    pub status: EnrollmentStatus,
    pub final_grade: Option<f64>,
}

/// DTO for creating an enrollment. Status defaults to `active`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEnrollment {
    pub student_id: DbId,
    pub course_id: DbId,
    pub status: Option<String>,
    pub final_grade: Option<f64>,
}

impl CreateEnrollment {
    /// Validate and return the parsed status.
    pub fn validate(&self) -> Result<EnrollmentStatus, CoreError> {
        validate_reference("student_id", self.student_id)?;
        validate_reference("course_id", self.course_id)?;
        validate_grade("final_grade", self.final_grade)?;
        match &self.status {
            Some(status) => EnrollmentStatus::parse(status),
            None => Ok(EnrollmentStatus::default()),
        }
    }
}

/// Full-record update of an enrollment.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEnrollment {
    pub student_id: DbId,
    pub course_id: DbId,
    pub status: String,
    pub final_grade: Option<f64>,
}

impl UpdateEnrollment {
    /// Validate and return the parsed status.
    pub fn validate(&self) -> Result<EnrollmentStatus, CoreError> {
        validate_reference("student_id", self.student_id)?;
        validate_reference("course_id", self.course_id)?;
        validate_grade("final_grade", self.final_grade)?;
        EnrollmentStatus::parse(&self.status)
    }
}

/// DTO for recording the outcome of an enrollment (status and grade only).
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentOutcome {
    pub status: String,
    pub final_grade: Option<f64>,
}

impl EnrollmentOutcome {
    pub fn validate(&self) -> Result<EnrollmentStatus, CoreError> {
        validate_grade("final_grade", self.final_grade)?;
        EnrollmentStatus::parse(&self.status)
    }
}

/// Optional filters for listing enrollments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrollmentFilter {
    pub status: Option<String>,
    pub course_id: Option<DbId>,
    pub student_id: Option<DbId>,
}
