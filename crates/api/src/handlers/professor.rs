//! Handlers for the `/professors` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use domus_core::types::DbId;
use domus_db::models::course::Course;
use domus_db::models::professor::{CreateProfessor, Professor, UpdateProfessor};
use domus_db::repositories::{CourseRepo, ProfessorRepo};

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::state::AppState;

/// POST /api/v1/professors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProfessor>,
) -> AppResult<(StatusCode, Json<Professor>)> {
    let professor = ProfessorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(professor)))
}

/// GET /api/v1/professors?q=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Professor>>> {
    let professors = match params.term() {
        Some(term) => ProfessorRepo::search(&state.pool, term).await?,
        None => ProfessorRepo::list(&state.pool).await?,
    };
    Ok(Json(professors))
}

/// GET /api/v1/professors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Professor>> {
    Ok(Json(ProfessorRepo::get(&state.pool, id).await?))
}

/// PUT /api/v1/professors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProfessor>,
) -> AppResult<Json<Professor>> {
    let professor = ProfessorRepo::update(&state.pool, id, &input).await?;
    Ok(Json(professor))
}

/// DELETE /api/v1/professors/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    ProfessorRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/professors/{id}/courses
pub async fn list_courses(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Course>>> {
    ProfessorRepo::get(&state.pool, id).await?;
    let courses = CourseRepo::list_by_professor(&state.pool, id).await?;
    Ok(Json(courses))
}
