pub mod academic;
pub mod catalog;
pub mod health;
pub mod volunteering;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /volunteers, /events, /volunteering/totals      volunteering domain
/// /professors, /courses, /students,
/// /enrollments, /profiles                         academic domain
/// /categories, /products, /tags,
/// /product-details                                catalog domain
/// ```
///
/// See each module for the per-resource tables.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(volunteering::router())
        .merge(academic::router())
        .merge(catalog::router())
}
