//! Handlers for the `/products` resource and its tag links.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use domus_core::error::CoreError;
use domus_core::types::DbId;
use domus_db::models::product::{CreateProduct, Product, UpdateProduct};
use domus_db::models::product_detail::ProductDetail;
use domus_db::models::tag::Tag;
use domus_db::repositories::{ProductDetailRepo, ProductRepo, TagRepo};
use serde::Deserialize;

use super::LinkChange;
use crate::error::{AppError, AppResult};
use crate::query::SearchParams;
use crate::state::AppState;

/// Request body for replacing a product's tag set.
#[derive(Debug, Deserialize)]
pub struct SetTags {
    pub tag_ids: Vec<DbId>,
}

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = ProductRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/v1/products?q=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Product>>> {
    let products = match params.term() {
        Some(term) => ProductRepo::search(&state.pool, term).await?,
        None => ProductRepo::list(&state.pool).await?,
    };
    Ok(Json(products))
}

/// GET /api/v1/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Product>> {
    Ok(Json(ProductRepo::get(&state.pool, id).await?))
}

/// PUT /api/v1/products/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<Product>> {
    Ok(Json(ProductRepo::update(&state.pool, id, &input).await?))
}

/// DELETE /api/v1/products/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    ProductRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/products/{id}/detail
pub async fn get_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProductDetail>> {
    ProductRepo::get(&state.pool, id).await?;
    let detail = ProductDetailRepo::find_by_product(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProductDetail",
            id,
        }))?;
    Ok(Json(detail))
}

// ---------------------------------------------------------------------------
// Tag links
// ---------------------------------------------------------------------------

/// GET /api/v1/products/{id}/tags
pub async fn list_tags(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Tag>>> {
    ProductRepo::get(&state.pool, id).await?;
    Ok(Json(TagRepo::list_by_product(&state.pool, id).await?))
}

/// PUT /api/v1/products/{id}/tags
pub async fn set_tags(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetTags>,
) -> AppResult<Json<Vec<Tag>>> {
    ProductRepo::set_tags(&state.pool, id, &input.tag_ids).await?;
    Ok(Json(TagRepo::list_by_product(&state.pool, id).await?))
}

/// PUT /api/v1/products/{id}/tags/{tag_id}
pub async fn attach_tag(
    State(state): State<AppState>,
    Path((id, tag_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<LinkChange>> {
    let changed = ProductRepo::attach_tag(&state.pool, id, tag_id).await?;
    Ok(Json(LinkChange { changed }))
}

/// DELETE /api/v1/products/{id}/tags/{tag_id}
pub async fn detach_tag(
    State(state): State<AppState>,
    Path((id, tag_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<LinkChange>> {
    let changed = ProductRepo::detach_tag(&state.pool, id, tag_id).await?;
    Ok(Json(LinkChange { changed }))
}
