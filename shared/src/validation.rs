//! Validation utilities for directory forms
//!
//! Every helper checks presence first and then shape, returning the cleaned
//! value so callers never hold a half-validated form.

use rust_decimal::Decimal;

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{MAX_STARS, MIN_STARS};
use crate::types::NumericInput;

// ============================================================================
// Text fields
// ============================================================================

/// Require a non-empty text field, returning it trimmed
pub fn require_text(field: &str, value: Option<&str>) -> DirectoryResult<String> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(DirectoryError::missing(field)),
    }
}

/// Split a comma-joined produce list into trimmed, non-empty labels
pub fn split_produce(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

/// Require at least one produce label after splitting on commas
pub fn require_produce(field: &str, value: Option<&str>) -> DirectoryResult<Vec<String>> {
    let labels = value.map(split_produce).unwrap_or_default();
    if labels.is_empty() {
        return Err(DirectoryError::missing(field));
    }
    Ok(labels)
}

// ============================================================================
// Numeric fields
// ============================================================================

fn require_numeric<'a>(
    field: &str,
    value: Option<&'a NumericInput>,
) -> DirectoryResult<&'a NumericInput> {
    match value {
        Some(input) if !input.is_blank() => Ok(input),
        _ => Err(DirectoryError::missing(field)),
    }
}

/// Require a non-negative delivery radius in kilometers
pub fn require_delivery_radius(field: &str, value: Option<&NumericInput>) -> DirectoryResult<Decimal> {
    let radius = require_numeric(field, value)?
        .as_decimal()
        .ok_or_else(|| DirectoryError::invalid(field, format!("{} must be a number", field)))?;

    if radius < Decimal::ZERO {
        return Err(DirectoryError::invalid(
            field,
            format!("{} cannot be negative", field),
        ));
    }
    Ok(radius)
}

/// Require a whole-number identifier.
///
/// Range is not checked here: an id that cannot exist resolves to not-found
/// at lookup time.
pub fn require_id(field: &str, value: Option<&NumericInput>) -> DirectoryResult<i64> {
    require_numeric(field, value)?
        .as_integer()
        .ok_or_else(|| DirectoryError::invalid(field, format!("{} must be a whole number", field)))
}

/// Require a star rating between 1 and 5
pub fn require_stars(field: &str, value: Option<&NumericInput>) -> DirectoryResult<u8> {
    let stars = require_numeric(field, value)?
        .as_integer()
        .ok_or_else(|| DirectoryError::invalid(field, format!("{} must be a whole number", field)))?;

    validate_stars(stars).map_err(|message| DirectoryError::invalid(field, message))
}

/// Validate a star count is in the accepted range
pub fn validate_stars(stars: i64) -> Result<u8, &'static str> {
    if stars < i64::from(MIN_STARS) || stars > i64::from(MAX_STARS) {
        return Err("Stars must be between 1 and 5");
    }
    Ok(stars as u8)
}
