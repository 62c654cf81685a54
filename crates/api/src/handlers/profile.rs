//! Handlers for the guest profile (read + the profile update action).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::{Form, Json};
use serde::Deserialize;
use tamarack_core::error::CoreError;
use tamarack_core::form;
use tamarack_core::profile::{parse_nationality_field, validate_national_id};
use tamarack_db::models::guest::UpdateGuestProfile;
use tamarack_db::repositories::GuestRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthGuest;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views;

/// Form body for `POST /account/profile`.
///
/// `nationality` is the combined `<country>%<flag>` select value.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileForm {
    #[serde(default)]
    pub national_id: String,
    #[serde(default)]
    pub nationality: String,
}

/// GET /account/profile
///
/// The authenticated guest's profile.
pub async fn get_profile(
    guest: AuthGuest,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let profile = GuestRepo::find_by_id(&state.pool, guest.guest_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Guest",
            id: guest.guest_id,
        }))?;

    Ok(Json(DataResponse { data: profile }))
}

/// POST /account/profile
///
/// Update the guest's nationality and national ID.
pub async fn update_profile(
    guest: AuthGuest,
    State(state): State<AppState>,
    Form(input): Form<UpdateProfileForm>,
) -> AppResult<impl IntoResponse> {
    let national_id = form::require("national_id", &input.national_id)?;
    validate_national_id(national_id)?;

    let nationality = parse_nationality_field(&input.nationality)?;

    let patch = UpdateGuestProfile {
        nationality: nationality.nationality,
        country_flag: nationality.country_flag,
        national_id: national_id.to_string(),
    };

    let updated = GuestRepo::update_profile(&state.pool, guest.guest_id, &patch)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, guest_id = guest.guest_id, "Guest profile update failed");
            AppError::Persistence("Guest profile could not be updated")
        })?;

    tracing::info!(guest_id = guest.guest_id, "Guest profile updated");

    state.views.invalidate(views::PROFILE_VIEW);

    Ok(Json(DataResponse { data: updated }))
}
