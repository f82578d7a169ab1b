//! Handlers for student profiles.
//!
//! Profiles are created at `/profiles` and addressed through their student
//! at `/students/{id}/profile`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use domus_core::types::DbId;
use domus_db::models::profile::{CreateProfile, Profile, UpdateProfile};
use domus_db::repositories::ProfileRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/profiles
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProfile>,
) -> AppResult<(StatusCode, Json<Profile>)> {
    let profile = ProfileRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/v1/profiles
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Profile>>> {
    Ok(Json(ProfileRepo::list(&state.pool).await?))
}

/// GET /api/v1/students/{id}/profile
pub async fn get_for_student(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
) -> AppResult<Json<Profile>> {
    Ok(Json(ProfileRepo::get(&state.pool, student_id).await?))
}

/// PUT /api/v1/students/{id}/profile
pub async fn update_for_student(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<Profile>> {
    let profile = ProfileRepo::update(&state.pool, student_id, &input).await?;
    Ok(Json(profile))
}

/// DELETE /api/v1/students/{id}/profile
pub async fn delete_for_student(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
) -> AppResult<StatusCode> {
    ProfileRepo::delete(&state.pool, student_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
