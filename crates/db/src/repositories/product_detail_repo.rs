//! Repository for the `product_details` table.

use domus_core::error::CoreError;
use domus_core::types::DbId;

use super::support::{self, CascadeTarget};
use crate::error::{StoreError, StoreResult};
use crate::models::product_detail::{CreateProductDetail, ProductDetail, UpdateProductDetail};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, product_id, dimensions, weight, material";

const CASCADE: CascadeTarget = CascadeTarget {
    entity: "ProductDetail",
    table: "product_details",
    key: "id",
    dependents: &[],
};

/// Provides CRUD operations for product details.
pub struct ProductDetailRepo;

impl ProductDetailRepo {
    /// Attach a detail record to a product that has none yet.
    pub async fn create(
        pool: &DbPool,
        input: &CreateProductDetail,
    ) -> StoreResult<ProductDetail> {
        input.validate()?;
        let mut tx = pool.begin().await?;
        support::require_reference(
            &mut *tx,
            "products",
            "Product",
            "product_id",
            input.product_id,
        )
        .await?;

        let existing = support::count_matching(
            &mut *tx,
            "product_details",
            "product_id = $1",
            input.product_id,
        )
        .await?;
        if existing > 0 {
            return Err(CoreError::UniqueViolation {
                entity: "ProductDetail",
                field: "product_id",
                message: format!("product {} already has a detail record", input.product_id),
            }
            .into());
        }

        let query = format!(
            "INSERT INTO product_details (product_id, dimensions, weight, material)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let detail = sqlx::query_as::<_, ProductDetail>(&query)
            .bind(input.product_id)
            .bind(input.dimensions.trim())
            .bind(input.weight.scaled())
            .bind(input.material.trim())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| StoreError::unique_on(e, "ProductDetail", "product_id"))?;

        tx.commit().await?;
        tracing::debug!(
            detail_id = detail.id,
            product_id = detail.product_id,
            "Created product detail"
        );
        Ok(detail)
    }

    /// Find a product detail by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<ProductDetail>> {
        let query = format!("SELECT {COLUMNS} FROM product_details WHERE id = $1");
        let detail = sqlx::query_as::<_, ProductDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(detail)
    }

    /// Fetch a product detail by ID, failing with `NotFound` if absent.
    pub async fn get(pool: &DbPool, id: DbId) -> StoreResult<ProductDetail> {
        Self::find_by_id(pool, id).await?.ok_or_else(|| {
            CoreError::NotFound {
                entity: "ProductDetail",
                id,
            }
            .into()
        })
    }

    /// The detail record of a product, if it has one.
    pub async fn find_by_product(
        pool: &DbPool,
        product_id: DbId,
    ) -> StoreResult<Option<ProductDetail>> {
        let query = format!("SELECT {COLUMNS} FROM product_details WHERE product_id = $1");
        let detail = sqlx::query_as::<_, ProductDetail>(&query)
            .bind(product_id)
            .fetch_optional(pool)
            .await?;
        Ok(detail)
    }

    pub async fn list(pool: &DbPool) -> StoreResult<Vec<ProductDetail>> {
        let query = format!("SELECT {COLUMNS} FROM product_details ORDER BY id");
        let details = sqlx::query_as::<_, ProductDetail>(&query)
            .fetch_all(pool)
            .await?;
        Ok(details)
    }

    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateProductDetail,
    ) -> StoreResult<ProductDetail> {
        input.validate()?;
        let query = format!(
            "UPDATE product_details SET dimensions = $2, weight = $3, material = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductDetail>(&query)
            .bind(id)
            .bind(input.dimensions.trim())
            .bind(input.weight.scaled())
            .bind(input.material.trim())
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: "ProductDetail",
                    id,
                }
                .into()
            })
    }

    pub async fn delete(pool: &DbPool, id: DbId) -> StoreResult<()> {
        support::delete_cascading(pool, &CASCADE, id).await
    }

    pub async fn count(pool: &DbPool) -> StoreResult<i64> {
        Ok(support::count_all(pool, "product_details").await?)
    }
}
