//! Booking model and mutation DTOs.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use tamarack_core::types::{DbId, Money, Timestamp};

/// A row from the `bookings` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Booking {
    pub id: DbId,
    pub created_at: Timestamp,
    pub cabin_id: DbId,
    pub guest_id: DbId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub num_nights: i32,
    pub num_guests: i32,
    pub cabin_price: Money,
    pub extras_price: Money,
    pub total_price: Money,
    pub status: String,
    pub has_breakfast: bool,
    pub is_paid: bool,
    pub observations: String,
}

/// Insert payload for a new booking.
///
/// The remaining columns (`status`, `extras_price`, `total_price`,
/// `is_paid`, `has_breakfast`) are fixed by the create action and set by
/// the insert itself, never by callers.
#[derive(Debug, Clone)]
pub struct CreateBooking {
    pub cabin_id: DbId,
    pub guest_id: DbId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub num_nights: i32,
    pub num_guests: i32,
    pub cabin_price: Money,
    pub observations: String,
}

/// The subset of booking fields a guest may edit after creation.
#[derive(Debug, Clone)]
pub struct UpdateBookingPatch {
    pub num_guests: i32,
    pub observations: String,
}
