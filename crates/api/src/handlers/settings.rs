//! Handler for the booking settings read surface.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tamarack_db::repositories::SettingsRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /settings
///
/// The booking limits the reservation form enforces (stay length window,
/// guest cap, breakfast price).
pub async fn get_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = SettingsRepo::get(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}
