//! Explicit coercion of text form fields into typed values.
//!
//! Every field submitted by the reservation and profile forms arrives as
//! text. Each coercion below is a named function with a single declared
//! failure mode: `CoreError::Validation` naming the offending field.

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult};
use crate::types::DbId;

/// Require a non-empty value for `field`.
pub fn require<'a>(field: &str, value: &'a str) -> CoreResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(trimmed)
}

/// Coerce a record id field to [`DbId`].
pub fn parse_id(field: &str, value: &str) -> CoreResult<DbId> {
    require(field, value)?
        .parse::<DbId>()
        .map_err(|_| CoreError::Validation(format!("{field} must be a valid id")))
}

/// Coerce a small positive count field (e.g. number of guests).
pub fn parse_count(field: &str, value: &str) -> CoreResult<i32> {
    let count: i32 = require(field, value)?
        .parse()
        .map_err(|_| CoreError::Validation(format!("{field} must be a whole number")))?;
    if count < 1 {
        return Err(CoreError::Validation(format!("{field} must be at least 1")));
    }
    Ok(count)
}

/// Coerce an ISO-8601 calendar date field (`YYYY-MM-DD`).
pub fn parse_date(field: &str, value: &str) -> CoreResult<NaiveDate> {
    require(field, value)?
        .parse::<NaiveDate>()
        .map_err(|_| CoreError::Validation(format!("{field} must be a date (YYYY-MM-DD)")))
}
