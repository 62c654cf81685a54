//! Reservation field rules: guest counts, observations, booking status.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum stored length of the observations free-text field, in characters.
pub const MAX_OBSERVATIONS_LENGTH: usize = 1000;

// ---------------------------------------------------------------------------
// Booking status
// ---------------------------------------------------------------------------

/// Lifecycle status of a booking.
///
/// New bookings always start as `Unconfirmed`; the remaining transitions are
/// driven by hotel staff tooling, not by the guest API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Unconfirmed,
    Confirmed,
    CheckedIn,
    CheckedOut,
}

impl BookingStatus {
    /// The wire/database representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unconfirmed => "unconfirmed",
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked-in",
            Self::CheckedOut => "checked-out",
        }
    }

    /// Parse the wire/database representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "unconfirmed" => Some(Self::Unconfirmed),
            "confirmed" => Some(Self::Confirmed),
            "checked-in" => Some(Self::CheckedIn),
            "checked-out" => Some(Self::CheckedOut),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

/// Truncate observations to the first [`MAX_OBSERVATIONS_LENGTH`] characters.
///
/// Operates on characters, not bytes, so multibyte input never splits a
/// character.
pub fn truncate_observations(observations: &str) -> String {
    observations.chars().take(MAX_OBSERVATIONS_LENGTH).collect()
}

/// Validate that the guest count fits the cabin.
pub fn validate_num_guests(num_guests: i32, max_capacity: i32) -> Result<(), String> {
    if num_guests < 1 {
        return Err("At least one guest is required".into());
    }
    if num_guests > max_capacity {
        return Err(format!(
            "This cabin sleeps at most {max_capacity} guests"
        ));
    }
    Ok(())
}

/// Validate the stay length against the configured booking window.
pub fn validate_stay_length(
    num_nights: i64,
    min_booking_length: i32,
    max_booking_length: i32,
) -> Result<(), String> {
    if num_nights < i64::from(min_booking_length) {
        return Err(format!(
            "Stays must be at least {min_booking_length} nights"
        ));
    }
    if num_nights > i64::from(max_booking_length) {
        return Err(format!(
            "Stays can be at most {max_booking_length} nights"
        ));
    }
    Ok(())
}
