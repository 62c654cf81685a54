//! Handler exposing the cached-view version registry.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /views
///
/// Current version of every view invalidated since startup. Clients compare
/// these against the versions they rendered and re-fetch what changed.
pub async fn list_view_versions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.views.snapshot(),
    }))
}
