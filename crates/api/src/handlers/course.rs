//! Handlers for the `/courses` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use domus_core::types::DbId;
use domus_db::models::course::{Course, CreateCourse, UpdateCourse};
use domus_db::models::enrollment::Enrollment;
use domus_db::models::student::Student;
use domus_db::repositories::{CourseRepo, EnrollmentRepo, StudentRepo};

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::state::AppState;

/// POST /api/v1/courses
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCourse>,
) -> AppResult<(StatusCode, Json<Course>)> {
    let course = CourseRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /api/v1/courses?q=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Course>>> {
    let courses = match params.term() {
        Some(term) => CourseRepo::search(&state.pool, term).await?,
        None => CourseRepo::list(&state.pool).await?,
    };
    Ok(Json(courses))
}

/// GET /api/v1/courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Course>> {
    Ok(Json(CourseRepo::get(&state.pool, id).await?))
}

/// PUT /api/v1/courses/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCourse>,
) -> AppResult<Json<Course>> {
    let course = CourseRepo::update(&state.pool, id, &input).await?;
    Ok(Json(course))
}

/// DELETE /api/v1/courses/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    CourseRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/courses/{id}/students
pub async fn list_students(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Student>>> {
    CourseRepo::get(&state.pool, id).await?;
    Ok(Json(StudentRepo::list_by_course(&state.pool, id).await?))
}

/// GET /api/v1/courses/{id}/enrollments
pub async fn list_enrollments(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Enrollment>>> {
    CourseRepo::get(&state.pool, id).await?;
    Ok(Json(EnrollmentRepo::list_by_course(&state.pool, id).await?))
}
