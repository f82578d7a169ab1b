//! Repository for the `products` table and the `product_tags` link table.

use domus_core::error::CoreError;
use domus_core::types::DbId;
use sqlx::SqliteConnection;

use super::support::{self, CascadeTarget, Dependent};
use crate::error::StoreResult;
use crate::models::product::{CreateProduct, Product, UpdateProduct};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, price, category_id";

/// Deleting a product removes its detail and its tag links.
const CASCADE: CascadeTarget = CascadeTarget {
    entity: "Product",
    table: "products",
    key: "id",
    dependents: &[
        Dependent::direct("product_details", "product_id = $1"),
        Dependent::direct("product_tags", "product_id = $1"),
    ],
};

/// Provides CRUD operations for products and their tag links.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, tagging it in the same transaction.
    pub async fn create(pool: &DbPool, input: &CreateProduct) -> StoreResult<Product> {
        input.validate()?;
        let mut tx = pool.begin().await?;
        support::require_reference(
            &mut *tx,
            "categories",
            "Category",
            "category_id",
            input.category_id,
        )
        .await?;

        let query = format!(
            "INSERT INTO products (name, price, category_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(input.name.trim())
            .bind(input.price.scaled())
            .bind(input.category_id)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(ids) = &input.tag_ids {
            replace_tags(&mut tx, product.id, ids).await?;
        }

        tx.commit().await?;
        tracing::debug!(
            product_id = product.id,
            category_id = product.category_id,
            "Created product"
        );
        Ok(product)
    }

    /// Find a product by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<Product>> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(product)
    }

    /// Fetch a product by ID, failing with `NotFound` if absent.
    pub async fn get(pool: &DbPool, id: DbId) -> StoreResult<Product> {
        Self::find_by_id(pool, id).await?.ok_or_else(|| {
            CoreError::NotFound {
                entity: "Product",
                id,
            }
            .into()
        })
    }

    /// List all products in insertion order.
    pub async fn list(pool: &DbPool) -> StoreResult<Vec<Product>> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        let products = sqlx::query_as::<_, Product>(&query).fetch_all(pool).await?;
        Ok(products)
    }

    /// Products filed under a category, in insertion order.
    pub async fn list_by_category(pool: &DbPool, category_id: DbId) -> StoreResult<Vec<Product>> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE category_id = $1 ORDER BY id");
        let products = sqlx::query_as::<_, Product>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await?;
        Ok(products)
    }

    /// Case-insensitive substring search on name.
    pub async fn search(pool: &DbPool, term: &str) -> StoreResult<Vec<Product>> {
        let query = format!(
            "SELECT {COLUMNS} FROM products WHERE name LIKE $1 ESCAPE '\\' ORDER BY id"
        );
        let products = sqlx::query_as::<_, Product>(&query)
            .bind(support::like_pattern(term))
            .fetch_all(pool)
            .await?;
        Ok(products)
    }

    /// Replace a product's fields, and its tag set when `tag_ids` is given.
    pub async fn update(pool: &DbPool, id: DbId, input: &UpdateProduct) -> StoreResult<Product> {
        input.validate()?;
        let mut tx = pool.begin().await?;
        support::require_found(&mut *tx, "products", "Product", id).await?;
        support::require_reference(
            &mut *tx,
            "categories",
            "Category",
            "category_id",
            input.category_id,
        )
        .await?;

        let query = format!(
            "UPDATE products SET name = $2, price = $3, category_id = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(input.name.trim())
            .bind(input.price.scaled())
            .bind(input.category_id)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(ids) = &input.tag_ids {
            replace_tags(&mut tx, id, ids).await?;
        }

        tx.commit().await?;
        Ok(product)
    }

    /// Delete a product with its detail and tag links. The tags stay.
    pub async fn delete(pool: &DbPool, id: DbId) -> StoreResult<()> {
        support::delete_cascading(pool, &CASCADE, id).await
    }

    // -----------------------------------------------------------------------
    // Product-tag links
    // -----------------------------------------------------------------------

    /// Tag a product. Idempotent: returns `false` if already tagged.
    pub async fn attach_tag(pool: &DbPool, product_id: DbId, tag_id: DbId) -> StoreResult<bool> {
        let mut tx = pool.begin().await?;
        support::require_found(&mut *tx, "products", "Product", product_id).await?;
        support::require_found(&mut *tx, "tags", "Tag", tag_id).await?;

        let result = sqlx::query(
            "INSERT INTO product_tags (product_id, tag_id)
             VALUES ($1, $2)
             ON CONFLICT (product_id, tag_id) DO NOTHING",
        )
        .bind(product_id)
        .bind(tag_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Untag a product. Returns `false` if it was not tagged.
    pub async fn detach_tag(pool: &DbPool, product_id: DbId, tag_id: DbId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM product_tags WHERE product_id = $1 AND tag_id = $2")
            .bind(product_id)
            .bind(tag_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace a product's whole tag set.
    pub async fn set_tags(pool: &DbPool, product_id: DbId, tag_ids: &[DbId]) -> StoreResult<()> {
        let mut tx = pool.begin().await?;
        support::require_found(&mut *tx, "products", "Product", product_id).await?;
        replace_tags(&mut tx, product_id, tag_ids).await?;
        tx.commit().await?;
        Ok(())
    }

    pub async fn count(pool: &DbPool) -> StoreResult<i64> {
        Ok(support::count_all(pool, "products").await?)
    }
}

/// Swap the product's link rows for exactly `tag_ids` (duplicates collapse).
async fn replace_tags(
    conn: &mut SqliteConnection,
    product_id: DbId,
    tag_ids: &[DbId],
) -> StoreResult<()> {
    sqlx::query("DELETE FROM product_tags WHERE product_id = $1")
        .bind(product_id)
        .execute(&mut *conn)
        .await?;

    for &tag_id in tag_ids {
        support::require_reference(&mut *conn, "tags", "Tag", "tag_ids", tag_id).await?;
        sqlx::query(
            "INSERT INTO product_tags (product_id, tag_id)
             VALUES ($1, $2)
             ON CONFLICT (product_id, tag_id) DO NOTHING",
        )
        .bind(product_id)
        .bind(tag_id)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}
