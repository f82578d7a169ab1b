//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts, with a `validate` method
//! - An update DTO carrying the full mutable record (updates are not patches)

pub mod category;
pub mod course;
pub mod enrollment;
pub mod event;
pub mod product;
pub mod product_detail;
pub mod professor;
pub mod profile;
pub mod student;
pub mod tag;
pub mod volunteer;

/// Trim an optional string, mapping blank input to `None`.
pub(crate) fn blank_to_none(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
