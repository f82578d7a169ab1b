//! Product detail model and DTOs (one-to-one with `products`).

use domus_core::decimal::Decimal;
use domus_core::error::CoreError;
use domus_core::types::DbId;
use domus_core::validation::{
    require_text, validate_decimal, validate_reference, MAX_NAME_LEN, WEIGHT_MAX_DIGITS,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `product_details` table. `product_id` is unique.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ProductDetail {
    pub id: DbId,
    pub product_id: DbId,
    pub dimensions: String,
    #[sqlx(try_from = "i64")]
    pub weight: Decimal,
    pub material: String,
}

/// DTO for creating a product detail.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductDetail {
    pub product_id: DbId,
    pub dimensions: String,
    pub weight: Decimal,
    pub material: String,
}

impl CreateProductDetail {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_reference("product_id", self.product_id)?;
        validate_detail_fields(&self.dimensions, self.weight, &self.material)
    }
}

/// Full-record update. The owning product cannot change.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProductDetail {
    pub dimensions: String,
    pub weight: Decimal,
    pub material: String,
}

impl UpdateProductDetail {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_detail_fields(&self.dimensions, self.weight, &self.material)
    }
}

fn validate_detail_fields(
    dimensions: &str,
    weight: Decimal,
    material: &str,
) -> Result<(), CoreError> {
    require_text("dimensions", dimensions, MAX_NAME_LEN)?;
    validate_decimal("weight", weight, WEIGHT_MAX_DIGITS)?;
    require_text("material", material, MAX_NAME_LEN)
}
