//! Repository for the `tags` table.

use domus_core::error::CoreError;
use domus_core::types::DbId;

use super::support::{self, CascadeTarget, Dependent};
use crate::error::StoreResult;
use crate::models::tag::{CreateTag, Tag, UpdateTag};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Deleting a tag only unlinks it from products.
const CASCADE: CascadeTarget = CascadeTarget {
    entity: "Tag",
    table: "tags",
    key: "id",
    dependents: &[Dependent::direct("product_tags", "tag_id = $1")],
};

/// Provides CRUD operations for tags.
pub struct TagRepo;

impl TagRepo {
    pub async fn create(pool: &DbPool, input: &CreateTag) -> StoreResult<Tag> {
        input.validate()?;
        let query = format!("INSERT INTO tags (name) VALUES ($1) RETURNING {COLUMNS}");
        let tag = sqlx::query_as::<_, Tag>(&query)
            .bind(input.name.trim())
            .fetch_one(pool)
            .await?;
        tracing::debug!(tag_id = tag.id, "Created tag");
        Ok(tag)
    }

    /// Find a tag by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<Tag>> {
        let query = format!("SELECT {COLUMNS} FROM tags WHERE id = $1");
        let tag = sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(tag)
    }

    /// Fetch a tag by ID, failing with `NotFound` if absent.
    pub async fn get(pool: &DbPool, id: DbId) -> StoreResult<Tag> {
        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CoreError::NotFound { entity: "Tag", id }.into())
    }

    /// List all tags ordered by name.
    pub async fn list(pool: &DbPool) -> StoreResult<Vec<Tag>> {
        let query = format!("SELECT {COLUMNS} FROM tags ORDER BY name, id");
        let tags = sqlx::query_as::<_, Tag>(&query).fetch_all(pool).await?;
        Ok(tags)
    }

    /// Tags linked to a product, ordered by name.
    pub async fn list_by_product(pool: &DbPool, product_id: DbId) -> StoreResult<Vec<Tag>> {
        let tags = sqlx::query_as::<_, Tag>(
            "SELECT t.id, t.name
             FROM tags t
             JOIN product_tags pt ON pt.tag_id = t.id
             WHERE pt.product_id = $1
             ORDER BY t.name, t.id",
        )
        .bind(product_id)
        .fetch_all(pool)
        .await?;
        Ok(tags)
    }

    pub async fn update(pool: &DbPool, id: DbId, input: &UpdateTag) -> StoreResult<Tag> {
        input.validate()?;
        let query = format!("UPDATE tags SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .bind(input.name.trim())
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| CoreError::NotFound { entity: "Tag", id }.into())
    }

    /// Delete a tag. Products that carried it stay.
    pub async fn delete(pool: &DbPool, id: DbId) -> StoreResult<()> {
        support::delete_cascading(pool, &CASCADE, id).await
    }

    pub async fn count(pool: &DbPool) -> StoreResult<i64> {
        Ok(support::count_all(pool, "tags").await?)
    }
}
