//! Handlers for the `/enrollments` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use domus_core::types::DbId;
use domus_db::models::enrollment::{
    CreateEnrollment, Enrollment, EnrollmentFilter, EnrollmentOutcome, UpdateEnrollment,
};
use domus_db::repositories::EnrollmentRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/enrollments
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEnrollment>,
) -> AppResult<(StatusCode, Json<Enrollment>)> {
    let enrollment = EnrollmentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// GET /api/v1/enrollments?status=&course_id=&student_id=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<EnrollmentFilter>,
) -> AppResult<Json<Vec<Enrollment>>> {
    Ok(Json(EnrollmentRepo::list_filtered(&state.pool, &filter).await?))
}

/// GET /api/v1/enrollments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Enrollment>> {
    Ok(Json(EnrollmentRepo::get(&state.pool, id).await?))
}

/// PUT /api/v1/enrollments/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEnrollment>,
) -> AppResult<Json<Enrollment>> {
    let enrollment = EnrollmentRepo::update(&state.pool, id, &input).await?;
    Ok(Json(enrollment))
}

/// PUT /api/v1/enrollments/{id}/outcome
pub async fn set_outcome(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<EnrollmentOutcome>,
) -> AppResult<Json<Enrollment>> {
    let enrollment = EnrollmentRepo::set_outcome(&state.pool, id, &input).await?;
    Ok(Json(enrollment))
}

/// DELETE /api/v1/enrollments/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    EnrollmentRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
