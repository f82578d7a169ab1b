//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use domus_core::types::DbId;
use domus_db::models::category::{Category, CreateCategory, UpdateCategory};
use domus_db::models::product::Product;
use domus_db::repositories::{CategoryRepo, ProductRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = CategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(CategoryRepo::list(&state.pool).await?))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    Ok(Json(CategoryRepo::get(&state.pool, id).await?))
}

/// PUT /api/v1/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    Ok(Json(CategoryRepo::update(&state.pool, id, &input).await?))
}

/// DELETE /api/v1/categories/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    CategoryRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/categories/{id}/products
pub async fn list_products(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Product>>> {
    CategoryRepo::get(&state.pool, id).await?;
    Ok(Json(ProductRepo::list_by_category(&state.pool, id).await?))
}
