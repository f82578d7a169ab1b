//! Handlers for the `/tags` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use domus_core::types::DbId;
use domus_db::models::tag::{CreateTag, Tag, UpdateTag};
use domus_db::repositories::TagRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/tags
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTag>,
) -> AppResult<(StatusCode, Json<Tag>)> {
    let tag = TagRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

/// GET /api/v1/tags
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Tag>>> {
    Ok(Json(TagRepo::list(&state.pool).await?))
}

/// GET /api/v1/tags/{id}
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Tag>> {
    Ok(Json(TagRepo::get(&state.pool, id).await?))
}

/// PUT /api/v1/tags/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTag>,
) -> AppResult<Json<Tag>> {
    Ok(Json(TagRepo::update(&state.pool, id, &input).await?))
}

/// DELETE /api/v1/tags/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    TagRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
