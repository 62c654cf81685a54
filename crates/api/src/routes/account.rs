//! Route definitions for the authenticated guest area.
//!
//! Mounted at `/account` by `api_routes()`. Every handler here requires a
//! logged-in guest via the `AuthGuest` extractor.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{profile, reservations};
use crate::state::AppState;

/// Guest area routes.
///
/// ```text
/// GET    /reservations        -> list_reservations
/// POST   /reservations        -> create_reservation (form, redirects)
/// POST   /reservations/{id}   -> update_reservation (form, redirects)
/// DELETE /reservations/{id}   -> delete_reservation
/// GET    /profile             -> get_profile
/// POST   /profile             -> update_profile (form)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/reservations",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route(
            "/reservations/{id}",
            post(reservations::update_reservation).delete(reservations::delete_reservation),
        )
        .route(
            "/profile",
            get(profile::get_profile).post(profile::update_profile),
        )
}
