//! Repository for the `bookings` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use tamarack_core::types::DbId;

use crate::models::booking::{Booking, CreateBooking, UpdateBookingPatch};

/// Column list for bookings queries.
const COLUMNS: &str = "id, created_at, cabin_id, guest_id, start_date, end_date, \
    num_nights, num_guests, cabin_price, extras_price, total_price, status, \
    has_breakfast, is_paid, observations";

/// Provides CRUD operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking, returning the created row.
    ///
    /// The creation defaults are fixed in the statement: status
    /// `unconfirmed`, no extras, unpaid, no breakfast, and a total equal to
    /// the cabin price.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings
                (cabin_id, guest_id, start_date, end_date, num_nights, num_guests,
                 cabin_price, extras_price, total_price, status, has_breakfast,
                 is_paid, observations)
             VALUES ($1, $2, $3, $4, $5, $6, $7, 0, $7, 'unconfirmed', FALSE, FALSE, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.cabin_id)
            .bind(input.guest_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.num_nights)
            .bind(input.num_guests)
            .bind(input.cabin_price)
            .bind(&input.observations)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all bookings owned by a guest, most recent stay first.
    pub async fn list_by_guest(pool: &PgPool, guest_id: DbId) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings
             WHERE guest_id = $1
             ORDER BY start_date DESC, id DESC"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(guest_id)
            .fetch_all(pool)
            .await
    }

    /// Apply the guest-editable patch to a booking by exact-ID match.
    pub async fn update_guest_fields(
        pool: &PgPool,
        id: DbId,
        patch: &UpdateBookingPatch,
    ) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "UPDATE bookings
             SET num_guests = $2, observations = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(patch.num_guests)
            .bind(&patch.observations)
            .fetch_one(pool)
            .await
    }

    /// Delete a booking by exact-ID match. Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// List bookings of a cabin that end on or after `from`, earliest first.
    ///
    /// Feeds the occupied-dates view for the reservation date picker.
    pub async fn list_current_by_cabin(
        pool: &PgPool,
        cabin_id: DbId,
        from: NaiveDate,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings
             WHERE cabin_id = $1 AND end_date >= $2
             ORDER BY start_date ASC"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(cabin_id)
            .bind(from)
            .fetch_all(pool)
            .await
    }
}
