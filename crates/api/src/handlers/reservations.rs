//! The reservation action pipeline: create, update, and delete a booking,
//! plus the guest's reservations list and the stay quote.
//!
//! Every mutating action runs the same ordered sequence -- authenticate,
//! coerce, authorize, validate, mutate, invalidate, redirect -- and stops at
//! the first failing step. Prices are always recomputed here from the
//! cabin's current rate; totals submitted by a client are never trusted.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};
use axum::{Form, Json};
use serde::Deserialize;
use tamarack_core::error::CoreError;
use tamarack_core::form;
use tamarack_core::pricing::{quote_stay, StayDates};
use tamarack_core::reservation::{
    truncate_observations, validate_num_guests, validate_stay_length,
};
use tamarack_core::types::DbId;
use tamarack_db::models::booking::{Booking, CreateBooking, UpdateBookingPatch};
use tamarack_db::models::cabin::Cabin;
use tamarack_db::repositories::{BookingRepo, CabinRepo, SettingsRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthGuest;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views;

/// Destination after a successful reservation.
const THANK_YOU_PATH: &str = "/cabins/thankyou";

// ---------------------------------------------------------------------------
// Form bodies
// ---------------------------------------------------------------------------

/// Form body for `POST /account/reservations`.
///
/// All fields arrive as text from the reservation form and are coerced
/// field by field; the date pair is the explicit stay range the guest
/// selected.
#[derive(Debug, Deserialize)]
pub struct CreateReservationForm {
    #[serde(default)]
    pub cabin_id: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub num_guests: String,
    #[serde(default)]
    pub observations: String,
}

/// Form body for `POST /account/reservations/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateReservationForm {
    #[serde(default)]
    pub num_guests: String,
    #[serde(default)]
    pub observations: String,
}

/// Form body for `POST /cabins/{id}/quote`.
#[derive(Debug, Deserialize)]
pub struct QuoteForm {
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /account/reservations
///
/// List the authenticated guest's bookings, most recent stay first.
pub async fn list_reservations(
    guest: AuthGuest,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let bookings = BookingRepo::list_by_guest(&state.pool, guest.guest_id).await?;
    Ok(Json(DataResponse { data: bookings }))
}

/// POST /account/reservations
///
/// Create a booking from the reservation form. On success the client is
/// redirected to the thank-you page; nothing after the redirect runs.
pub async fn create_reservation(
    guest: AuthGuest,
    State(state): State<AppState>,
    Form(input): Form<CreateReservationForm>,
) -> AppResult<Redirect> {
    // Coerce the text fields.
    let cabin_id = form::parse_id("cabin_id", &input.cabin_id)?;
    let dates = StayDates::new(
        form::parse_date("start_date", &input.start_date)?,
        form::parse_date("end_date", &input.end_date)?,
    );
    let num_guests = form::parse_count("num_guests", &input.num_guests)?;
    let observations = truncate_observations(&input.observations);

    // Load the cabin and the booking settings.
    let cabin = CabinRepo::find_by_id(&state.pool, cabin_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cabin",
            id: cabin_id,
        }))?;
    let settings = SettingsRepo::get(&state.pool).await?;

    // Price the stay from the cabin's current rate.
    let quote = quote_stay(&dates, cabin.regular_price, cabin.discount)?;

    validate_stay_length(
        quote.num_nights,
        settings.min_booking_length,
        settings.max_booking_length,
    )
    .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let capacity = cabin.max_capacity.min(settings.max_guests_per_booking);
    validate_num_guests(num_guests, capacity)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    // Insert. The creation defaults (unconfirmed, unpaid, no extras) are
    // fixed by the repository statement.
    let booking = BookingRepo::create(
        &state.pool,
        &CreateBooking {
            cabin_id,
            guest_id: guest.guest_id,
            start_date: dates.start_date,
            end_date: dates.end_date,
            num_nights: quote.num_nights as i32,
            num_guests,
            cabin_price: quote.cabin_price,
            observations,
        },
    )
    .await
    .map_err(|e| {
        tracing::error!(error = %e, cabin_id, "Booking insert failed");
        AppError::Persistence("Reservation could not be created")
    })?;

    tracing::info!(
        guest_id = guest.guest_id,
        booking_id = booking.id,
        cabin_id,
        num_nights = booking.num_nights,
        total_price = booking.total_price,
        "Reservation created"
    );

    state.views.invalidate(&views::cabin_view(cabin_id));

    Ok(Redirect::to(THANK_YOU_PATH))
}

/// POST /account/reservations/{id}
///
/// Update the guest-editable fields of a booking, then redirect back to the
/// reservations list.
pub async fn update_reservation(
    guest: AuthGuest,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(input): Form<UpdateReservationForm>,
) -> AppResult<Redirect> {
    let num_guests = form::parse_count("num_guests", &input.num_guests)?;
    let observations = truncate_observations(&input.observations);

    let booking = authorize_booking(&state, guest, id, "update this reservation").await?;

    let cabin = load_cabin(&state, booking.cabin_id).await?;
    validate_num_guests(num_guests, cabin.max_capacity)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    BookingRepo::update_guest_fields(
        &state.pool,
        booking.id,
        &UpdateBookingPatch {
            num_guests,
            observations,
        },
    )
    .await
    .map_err(|e| {
        tracing::error!(error = %e, booking_id = booking.id, "Booking update failed");
        AppError::Persistence("The reservation could not be updated")
    })?;

    tracing::info!(
        guest_id = guest.guest_id,
        booking_id = booking.id,
        "Reservation updated"
    );

    state.views.invalidate(views::RESERVATIONS_VIEW);
    state.views.invalidate(&views::reservation_edit_view(booking.id));

    Ok(Redirect::to(views::RESERVATIONS_VIEW))
}

/// DELETE /account/reservations/{id}
///
/// Delete a booking owned by the authenticated guest. The caller re-renders
/// in place, so there is no redirect.
pub async fn delete_reservation(
    guest: AuthGuest,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let booking = authorize_booking(&state, guest, id, "delete this booking").await?;

    BookingRepo::delete(&state.pool, booking.id).await.map_err(|e| {
        tracing::error!(error = %e, booking_id = booking.id, "Booking delete failed");
        AppError::Persistence("Booking could not be deleted")
    })?;

    tracing::info!(
        guest_id = guest.guest_id,
        booking_id = booking.id,
        "Reservation deleted"
    );

    state.views.invalidate(views::RESERVATIONS_VIEW);

    Ok(StatusCode::NO_CONTENT)
}

/// POST /cabins/{id}/quote
///
/// Price a candidate date range against the cabin's current rate without
/// persisting anything. An unset or inverted range fails validation, which
/// is also what keeps the submit control disabled in the form.
pub async fn quote_reservation(
    State(state): State<AppState>,
    Path(cabin_id): Path<DbId>,
    Form(input): Form<QuoteForm>,
) -> AppResult<impl IntoResponse> {
    let dates = StayDates::new(
        form::parse_date("start_date", &input.start_date)?,
        form::parse_date("end_date", &input.end_date)?,
    );

    let cabin = load_cabin(&state, cabin_id).await?;
    let quote = quote_stay(&dates, cabin.regular_price, cabin.discount)?;

    Ok(Json(DataResponse { data: quote }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a booking and verify the authenticated guest owns it.
///
/// `action` names the attempted mutation in the refusal message
/// ("update this reservation", "delete this booking").
async fn authorize_booking(
    state: &AppState,
    guest: AuthGuest,
    booking_id: DbId,
    action: &str,
) -> AppResult<Booking> {
    let booking = BookingRepo::find_by_id(&state.pool, booking_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id: booking_id,
        }))?;

    if booking.guest_id != guest.guest_id {
        tracing::warn!(
            guest_id = guest.guest_id,
            booking_id,
            owner_id = booking.guest_id,
            "Rejected mutation of a booking owned by another guest"
        );
        return Err(AppError::Core(CoreError::Forbidden(format!(
            "You are not allowed to {action}"
        ))));
    }

    Ok(booking)
}

async fn load_cabin(state: &AppState, cabin_id: DbId) -> AppResult<Cabin> {
    CabinRepo::find_by_id(&state.pool, cabin_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cabin",
            id: cabin_id,
        }))
}
