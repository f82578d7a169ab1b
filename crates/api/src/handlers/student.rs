//! Handlers for the `/students` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use domus_core::types::DbId;
use domus_db::models::course::Course;
use domus_db::models::enrollment::Enrollment;
use domus_db::models::student::{CreateStudent, Student, UpdateStudent};
use domus_db::repositories::{CourseRepo, EnrollmentRepo, StudentRepo};

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::state::AppState;

/// POST /api/v1/students
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    let student = StudentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/v1/students?q=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Student>>> {
    let students = match params.term() {
        Some(term) => StudentRepo::search(&state.pool, term).await?,
        None => StudentRepo::list(&state.pool).await?,
    };
    Ok(Json(students))
}

/// GET /api/v1/students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Student>> {
    Ok(Json(StudentRepo::get(&state.pool, id).await?))
}

/// PUT /api/v1/students/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStudent>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::update(&state.pool, id, &input).await?;
    Ok(Json(student))
}

/// DELETE /api/v1/students/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    StudentRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/students/{id}/enrollments
pub async fn list_enrollments(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Enrollment>>> {
    StudentRepo::get(&state.pool, id).await?;
    Ok(Json(EnrollmentRepo::list_by_student(&state.pool, id).await?))
}

/// GET /api/v1/students/{id}/courses
pub async fn list_courses(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Course>>> {
    StudentRepo::get(&state.pool, id).await?;
    Ok(Json(CourseRepo::list_by_student(&state.pool, id).await?))
}
