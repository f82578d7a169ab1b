//! Product entity model and DTOs.
//!
//! A product belongs to one category and carries any number of tags.
//! Products carry no description.

use domus_core::decimal::Decimal;
use domus_core::error::CoreError;
use domus_core::types::DbId;
use domus_core::validation::{
    require_text, validate_decimal, validate_reference, MAX_NAME_LEN, PRICE_MAX_DIGITS,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    /// Stored as a scaled integer; see [`Decimal`].
    #[sqlx(try_from = "i64")]
    pub price: Decimal,
    pub category_id: DbId,
}

/// DTO for creating a product. `tag_ids`, when present, becomes its tag set.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub price: Decimal,
    pub category_id: DbId,
    pub tag_ids: Option<Vec<DbId>>,
}

/// Full-record update. A `None` tag list leaves the links untouched.
pub type UpdateProduct = CreateProduct;

impl CreateProduct {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_text("name", &self.name, MAX_NAME_LEN)?;
        validate_decimal("price", self.price, PRICE_MAX_DIGITS)?;
        validate_reference("category_id", self.category_id)?;
        for id in self.tag_ids.iter().flatten() {
            validate_reference("tag_ids", *id)?;
        }
        Ok(())
    }
}
