//! Routes for categories, products, tags and product details.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{category, product, product_detail, tag};
use crate::state::AppState;

/// ```text
/// GET    /categories                     -> list
/// POST   /categories                     -> create
/// GET    /categories/{id}                -> get_by_id
/// PUT    /categories/{id}                -> update
/// DELETE /categories/{id}                -> delete (cascades to products)
/// GET    /categories/{id}/products       -> list_products
///
/// GET    /products                       -> list (?q= searches)
/// POST   /products                       -> create
/// GET    /products/{id}                  -> get_by_id
/// PUT    /products/{id}                  -> update
/// DELETE /products/{id}                  -> delete (cascades to detail, tag links)
/// GET    /products/{id}/detail           -> get_detail
/// GET    /products/{id}/tags             -> list_tags
/// PUT    /products/{id}/tags             -> set_tags
/// PUT    /products/{id}/tags/{tag_id}    -> attach_tag
/// DELETE /products/{id}/tags/{tag_id}    -> detach_tag
///
/// GET    /tags                           -> list
/// POST   /tags                           -> create
/// GET    /tags/{id}                      -> get_by_id
/// PUT    /tags/{id}                      -> update
/// DELETE /tags/{id}                      -> delete (unlinks products)
///
/// GET    /product-details                -> list
/// POST   /product-details                -> create
/// GET    /product-details/{id}           -> get_by_id
/// PUT    /product-details/{id}           -> update
/// DELETE /product-details/{id}           -> delete
/// ```
pub fn router() -> Router<AppState> {
    let categories = Router::new()
        .route("/", get(category::list).post(category::create))
        .route(
            "/{id}",
            get(category::get_by_id)
                .put(category::update)
                .delete(category::delete),
        )
        .route("/{id}/products", get(category::list_products));

    let products = Router::new()
        .route("/", get(product::list).post(product::create))
        .route(
            "/{id}",
            get(product::get_by_id)
                .put(product::update)
                .delete(product::delete),
        )
        .route("/{id}/detail", get(product::get_detail))
        .route("/{id}/tags", get(product::list_tags).put(product::set_tags))
        .route(
            "/{id}/tags/{tag_id}",
            put(product::attach_tag).delete(product::detach_tag),
        );

    let tags = Router::new()
        .route("/", get(tag::list).post(tag::create))
        .route(
            "/{id}",
            get(tag::get_by_id).put(tag::update).delete(tag::delete),
        );

    let details = Router::new()
        .route("/", get(product_detail::list).post(product_detail::create))
        .route(
            "/{id}",
            get(product_detail::get_by_id)
                .put(product_detail::update)
                .delete(product_detail::delete),
        );

    Router::new()
        .nest("/categories", categories)
        .nest("/products", products)
        .nest("/tags", tags)
        .nest("/product-details", details)
}
