//! Handlers for the `/product-details` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use domus_core::types::DbId;
use domus_db::models::product_detail::{CreateProductDetail, ProductDetail, UpdateProductDetail};
use domus_db::repositories::ProductDetailRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/product-details
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProductDetail>,
) -> AppResult<(StatusCode, Json<ProductDetail>)> {
    let detail = ProductDetailRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// GET /api/v1/product-details
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProductDetail>>> {
    Ok(Json(ProductDetailRepo::list(&state.pool).await?))
}

/// GET /api/v1/product-details/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProductDetail>> {
    Ok(Json(ProductDetailRepo::get(&state.pool, id).await?))
}

/// PUT /api/v1/product-details/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProductDetail>,
) -> AppResult<Json<ProductDetail>> {
    Ok(Json(ProductDetailRepo::update(&state.pool, id, &input).await?))
}

/// DELETE /api/v1/product-details/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    ProductDetailRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
