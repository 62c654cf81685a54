//! Stay pricing: nights count and cabin price from a date range and a rate.
//!
//! The price of a stay is always derived here, server-side, from the selected
//! range and the cabin's current rate. Client-supplied totals are never
//! trusted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Money;

/// A candidate stay: check-in and check-out dates.
///
/// Valid only when `start_date < end_date`. The range is half-open: the
/// guest sleeps over on every night from `start_date` up to but excluding
/// `end_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayDates {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl StayDates {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Number of nights stayed. Negative or zero for inverted/empty ranges.
    pub fn num_nights(&self) -> i64 {
        nights_between(self.start_date, self.end_date)
    }

    /// Fail with a user-facing validation error unless the range spans at
    /// least one night.
    pub fn validate(&self) -> CoreResult<()> {
        if self.num_nights() < 1 {
            return Err(CoreError::Validation(
                "Check-out date must be after check-in date".into(),
            ));
        }
        Ok(())
    }
}

/// Signed day difference between two dates (nights stayed, not calendar
/// days inclusive).
pub fn nights_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// The priced result of a valid stay request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StayQuote {
    pub num_nights: i64,
    pub cabin_price: Money,
}

/// Price a stay against a cabin's current rate.
///
/// `cabin_price = num_nights * (regular_price - discount)`, exactly.
/// Fails `Validation` when the range does not span at least one night or
/// when the discount is negative or exceeds the regular price.
pub fn quote_stay(dates: &StayDates, regular_price: Money, discount: Money) -> CoreResult<StayQuote> {
    dates.validate()?;

    if discount < 0 || discount > regular_price {
        return Err(CoreError::Validation(
            "Cabin discount must be between zero and the regular price".into(),
        ));
    }

    let num_nights = dates.num_nights();
    Ok(StayQuote {
        num_nights,
        cabin_price: num_nights * (regular_price - discount),
    })
}

/// Every date covered by a stay, check-in inclusive, check-out exclusive.
///
/// Used to mark occupied days in the date picker. Returns an empty vec for
/// invalid ranges.
pub fn dates_occupied(dates: &StayDates) -> Vec<NaiveDate> {
    let nights = dates.num_nights();
    if nights < 1 {
        return Vec::new();
    }
    dates
        .start_date
        .iter_days()
        .take(nights as usize)
        .collect()
}
