//! HTTP handlers, one module per resource.
//!
//! Handlers stay thin: extract, call a repository, wrap the result.

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

use serde::Serialize;

/// Result of attaching or detaching a many-to-many link.
#[derive(Debug, Serialize)]
pub struct LinkChange {
    /// Whether a link row was inserted or removed.
    pub changed: bool,
}
