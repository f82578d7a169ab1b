//! Repository for the `categories` table.

use domus_core::error::CoreError;
use domus_core::types::DbId;

use super::support::{self, CascadeTarget, Dependent};
use crate::error::StoreResult;
use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Deleting a category removes its products along with their details and
/// tag links. The tags themselves stay.
const CASCADE: CascadeTarget = CascadeTarget {
    entity: "Category",
    table: "categories",
    key: "id",
    dependents: &[
        Dependent::direct("products", "category_id = $1"),
        Dependent {
            table: "product_details",
            owned_by: "product_id IN (SELECT id FROM products WHERE category_id = $1)",
            orphaned: "product_id NOT IN (SELECT id FROM products)",
        },
        Dependent {
            table: "product_tags",
            owned_by: "product_id IN (SELECT id FROM products WHERE category_id = $1)",
            orphaned: "product_id NOT IN (SELECT id FROM products)",
        },
    ],
};

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    pub async fn create(pool: &DbPool, input: &CreateCategory) -> StoreResult<Category> {
        input.validate()?;
        let query = format!("INSERT INTO categories (name) VALUES ($1) RETURNING {COLUMNS}");
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(input.name.trim())
            .fetch_one(pool)
            .await?;
        tracing::debug!(category_id = category.id, "Created category");
        Ok(category)
    }

    /// Find a category by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<Category>> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(category)
    }

    /// Fetch a category by ID, failing with `NotFound` if absent.
    pub async fn get(pool: &DbPool, id: DbId) -> StoreResult<Category> {
        Self::find_by_id(pool, id).await?.ok_or_else(|| {
            CoreError::NotFound {
                entity: "Category",
                id,
            }
            .into()
        })
    }

    /// List all categories ordered by name.
    pub async fn list(pool: &DbPool) -> StoreResult<Vec<Category>> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name, id");
        let categories = sqlx::query_as::<_, Category>(&query)
            .fetch_all(pool)
            .await?;
        Ok(categories)
    }

    pub async fn update(pool: &DbPool, id: DbId, input: &UpdateCategory) -> StoreResult<Category> {
        input.validate()?;
        let query = format!("UPDATE categories SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(input.name.trim())
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: "Category",
                    id,
                }
                .into()
            })
    }

    /// Delete a category and every product filed under it.
    pub async fn delete(pool: &DbPool, id: DbId) -> StoreResult<()> {
        support::delete_cascading(pool, &CASCADE, id).await
    }

    pub async fn count(pool: &DbPool) -> StoreResult<i64> {
        Ok(support::count_all(pool, "categories").await?)
    }
}
