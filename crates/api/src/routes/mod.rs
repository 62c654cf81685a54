pub mod account;
pub mod auth;
pub mod cabins;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                       signup (public)
/// /auth/login                        login (public)
/// /auth/refresh                      refresh (public)
/// /auth/logout                       logout (requires auth)
///
/// /cabins                            catalog
/// /cabins/{id}                       one cabin
/// /cabins/{id}/booked-dates          occupied dates for the date picker
/// /cabins/{id}/quote                 price a candidate date range (POST)
///
/// /account/reservations              list (GET), create (POST)
/// /account/reservations/{id}         update (POST), delete (DELETE)
/// /account/profile                   read (GET), update (POST)
///
/// /settings                          booking limits
/// /views                             cached-view versions
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/cabins", cabins::router())
        .nest("/account", account::router())
        .route("/settings", get(handlers::settings::get_settings))
        .route("/views", get(handlers::views::list_view_versions))
}
