//! Booking settings model (single-row table).

use serde::Serialize;
use sqlx::FromRow;
use tamarack_core::types::{DbId, Money};

/// The `settings` row governing booking limits.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Settings {
    pub id: DbId,
    pub min_booking_length: i32,
    pub max_booking_length: i32,
    pub max_guests_per_booking: i32,
    pub breakfast_price: Money,
}
