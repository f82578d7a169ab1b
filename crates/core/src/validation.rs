//! Field validation rules for the three domains.
//!
//! Every function here is pure: it inspects a value and either accepts it or
//! returns [`CoreError::Validation`] naming the offending field. The store
//! calls these before touching the database, so a rejected input never
//! opens a transaction.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateEmail;

use crate::decimal::Decimal;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of person, course, category, product and detail names.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of an event title.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length of a tag name.
pub const MAX_TAG_NAME_LEN: usize = 50;

/// Maximum length of an email address (RFC 5321 path limit).
pub const MAX_EMAIL_LEN: usize = 254;

/// Maximum length of a phone number as typed.
pub const MAX_PHONE_LEN: usize = 20;

/// Maximum length of the social links string and the photo path.
pub const MAX_LINK_LEN: usize = 255;

/// Total digits allowed in a product price (`DECIMAL(10, 2)`).
pub const PRICE_MAX_DIGITS: u32 = 10;

/// Total digits allowed in a product weight (`DECIMAL(6, 2)`).
pub const WEIGHT_MAX_DIGITS: u32 = 6;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+()\- ]+$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Require a non-blank string of at most `max_len` characters.
pub fn require_text(field: &'static str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, "must not be empty"));
    }
    limit_text(field, value, max_len)
}

/// Accept any string (including empty) of at most `max_len` characters.
pub fn limit_text(field: &'static str, value: &str, max_len: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(CoreError::validation(
            field,
            format!("must be at most {max_len} characters, got {len}"),
        ));
    }
    Ok(())
}

/// Require a syntactically valid email address.
pub fn validate_email(field: &'static str, value: &str) -> Result<(), CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(field, "must not be empty"));
    }
    limit_text(field, trimmed, MAX_EMAIL_LEN)?;
    if !trimmed.to_string().validate_email() {
        return Err(CoreError::validation(
            field,
            format!("'{trimmed}' is not a valid email address"),
        ));
    }
    Ok(())
}

/// Validate an optional phone number: digits, spaces and `+ - ( )` only.
pub fn validate_phone(field: &'static str, value: Option<&str>) -> Result<(), CoreError> {
    let Some(phone) = value.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(());
    };
    limit_text(field, phone, MAX_PHONE_LEN)?;
    if !PHONE_RE.is_match(phone) {
        return Err(CoreError::validation(
            field,
            "may only contain digits, spaces and + - ( )",
        ));
    }
    Ok(())
}

/// Require a non-negative decimal with at most `max_digits` total digits.
///
/// The two-fraction-digit scale is already guaranteed by [`Decimal`].
pub fn validate_decimal(
    field: &'static str,
    value: Decimal,
    max_digits: u32,
) -> Result<(), CoreError> {
    if value.is_negative() {
        return Err(CoreError::validation(field, "must not be negative"));
    }
    if value.total_digits() > max_digits {
        return Err(CoreError::validation(
            field,
            format!(
                "must have at most {max_digits} digits ({} before the decimal point)",
                max_digits - Decimal::SCALE
            ),
        ));
    }
    Ok(())
}

/// Accept an absent grade or any finite number. No range is enforced.
pub fn validate_grade(field: &'static str, value: Option<f64>) -> Result<(), CoreError> {
    match value {
        Some(grade) if !grade.is_finite() => {
            Err(CoreError::validation(field, "must be a finite number"))
        }
        _ => Ok(()),
    }
}

/// Reject non-positive identifiers before they reach a query.
pub fn validate_reference(field: &'static str, id: i64) -> Result<(), CoreError> {
    if id <= 0 {
        return Err(CoreError::validation(
            field,
            format!("must be a positive id, got {id}"),
        ));
    }
    Ok(())
}
