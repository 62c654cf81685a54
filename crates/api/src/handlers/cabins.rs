//! Handlers for the cabin catalog read surface.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use tamarack_core::error::CoreError;
use tamarack_core::pricing::{dates_occupied, StayDates};
use tamarack_core::types::DbId;
use tamarack_db::repositories::{BookingRepo, CabinRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /cabins
///
/// The full cabin catalog, cheapest effective rate first.
pub async fn list_cabins(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cabins = CabinRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: cabins }))
}

/// GET /cabins/{id}
pub async fn get_cabin(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let cabin = CabinRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Cabin",
            id,
        }))?;

    Ok(Json(DataResponse { data: cabin }))
}

/// GET /cabins/{id}/booked-dates
///
/// Every date covered by a current or future booking of the cabin, for the
/// reservation date picker. Dates are deduplicated and sorted.
pub async fn booked_dates(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // 404 for unknown cabins rather than an empty date list.
    if CabinRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Cabin",
            id,
        }));
    }

    let today = chrono::Utc::now().date_naive();
    let bookings = BookingRepo::list_current_by_cabin(&state.pool, id, today).await?;

    let mut dates: Vec<NaiveDate> = bookings
        .iter()
        .flat_map(|b| dates_occupied(&StayDates::new(b.start_date, b.end_date)))
        .collect();
    dates.sort_unstable();
    dates.dedup();

    Ok(Json(DataResponse { data: dates }))
}
