//! Repository for the `profiles` table.
//!
//! Profiles are keyed by their student; every lookup here takes a student id.

use domus_core::error::CoreError;
use domus_core::types::DbId;

use super::support::{self, CascadeTarget};
use crate::error::{StoreError, StoreResult};
use crate::models::blank_to_none;
use crate::models::profile::{CreateProfile, Profile, UpdateProfile};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "student_id, biography, photo_path, social_links";

const CASCADE: CascadeTarget = CascadeTarget {
    entity: "Profile",
    table: "profiles",
    key: "student_id",
    dependents: &[],
};

/// Provides CRUD operations for student profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Create the profile of an existing student. A student has at most one.
    pub async fn create(pool: &DbPool, input: &CreateProfile) -> StoreResult<Profile> {
        input.validate()?;
        let mut tx = pool.begin().await?;
        support::require_reference(
            &mut *tx,
            "students",
            "Student",
            "student_id",
            input.student_id,
        )
        .await?;

        let existing =
            support::count_matching(&mut *tx, "profiles", "student_id = $1", input.student_id)
                .await?;
        if existing > 0 {
            return Err(CoreError::UniqueViolation {
                entity: "Profile",
                field: "student_id",
                message: format!("student {} already has a profile", input.student_id),
            }
            .into());
        }

        let query = format!(
            "INSERT INTO profiles (student_id, biography, photo_path, social_links)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let profile = sqlx::query_as::<_, Profile>(&query)
            .bind(input.student_id)
            .bind(&input.biography)
            .bind(blank_to_none(input.photo_path.as_deref()))
            .bind(input.social_links.trim())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| StoreError::unique_on(e, "Profile", "student_id"))?;

        tx.commit().await?;
        tracing::debug!(student_id = profile.student_id, "Created profile");
        Ok(profile)
    }

    /// Find a student's profile.
    pub async fn find_by_student(pool: &DbPool, student_id: DbId) -> StoreResult<Option<Profile>> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE student_id = $1");
        let profile = sqlx::query_as::<_, Profile>(&query)
            .bind(student_id)
            .fetch_optional(pool)
            .await?;
        Ok(profile)
    }

    /// Fetch a student's profile, failing with `NotFound` if absent.
    pub async fn get(pool: &DbPool, student_id: DbId) -> StoreResult<Profile> {
        Self::find_by_student(pool, student_id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: "Profile",
                    id: student_id,
                }
                .into()
            })
    }

    pub async fn list(pool: &DbPool) -> StoreResult<Vec<Profile>> {
        let query = format!("SELECT {COLUMNS} FROM profiles ORDER BY student_id");
        let profiles = sqlx::query_as::<_, Profile>(&query).fetch_all(pool).await?;
        Ok(profiles)
    }

    /// Replace a profile's biography, photo path and links.
    pub async fn update(
        pool: &DbPool,
        student_id: DbId,
        input: &UpdateProfile,
    ) -> StoreResult<Profile> {
        input.validate()?;
        let query = format!(
            "UPDATE profiles SET biography = $2, photo_path = $3, social_links = $4
             WHERE student_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(student_id)
            .bind(&input.biography)
            .bind(blank_to_none(input.photo_path.as_deref()))
            .bind(input.social_links.trim())
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: "Profile",
                    id: student_id,
                }
                .into()
            })
    }

    /// Delete a student's profile. The student stays.
    pub async fn delete(pool: &DbPool, student_id: DbId) -> StoreResult<()> {
        support::delete_cascading(pool, &CASCADE, student_id).await
    }

    pub async fn count(pool: &DbPool) -> StoreResult<i64> {
        Ok(support::count_all(pool, "profiles").await?)
    }
}
