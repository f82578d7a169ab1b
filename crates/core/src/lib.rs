//! Pure domain logic shared by the store and the API layer.
//!
//! Nothing in this crate touches the database: it holds the identifier and
//! time aliases, the error taxonomy, field validation rules, the fixed-point
//! decimal used for prices and weights, and the enrollment status enum.

pub mod decimal;
pub mod enrollment;
pub mod error;
pub mod types;
pub mod validation;
