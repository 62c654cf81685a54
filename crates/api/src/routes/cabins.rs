//! Route definitions for the cabin catalog.
//!
//! Mounted at `/cabins` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{cabins, reservations};
use crate::state::AppState;

/// Cabin routes.
///
/// ```text
/// GET  /                   -> list_cabins
/// GET  /{id}               -> get_cabin
/// GET  /{id}/booked-dates  -> booked_dates
/// POST /{id}/quote         -> quote_reservation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cabins::list_cabins))
        .route("/{id}", get(cabins::get_cabin))
        .route("/{id}/booked-dates", get(cabins::booked_dates))
        .route("/{id}/quote", post(reservations::quote_reservation))
}
