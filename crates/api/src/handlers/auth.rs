//! Handlers for the `/auth` resource (signup, login, refresh, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tamarack_core::error::CoreError;
use tamarack_core::types::DbId;
use tamarack_db::models::guest::CreateGuest;
use tamarack_db::repositories::{GuestRepo, SessionRepo};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthGuest;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by signup, login, and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub guest: GuestInfo,
}

/// Public guest info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct GuestInfo {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/signup
///
/// Create a guest account and log it in. Returns access and refresh tokens.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let full_name = input.full_name.trim();
    if full_name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Full name is required".into(),
        )));
    }

    let email = input.email.trim().to_ascii_lowercase();
    if !email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "A valid email address is required".into(),
        )));
    }

    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if GuestRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "A guest with this email already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let guest = GuestRepo::create(
        &state.pool,
        &CreateGuest {
            full_name: full_name.to_string(),
            email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(guest_id = guest.id, "Guest account created");

    let response = create_auth_response(&state, guest.id, &guest.full_name, &guest.email).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    // 1. Find guest by email.
    let email = input.email.trim().to_ascii_lowercase();
    let guest = GuestRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    // 2. Verify password.
    let password_valid = verify_password(&input.password, &guest.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    // 3. Generate tokens and create session.
    let response = create_auth_response(&state, guest.id, &guest.full_name, &guest.email).await?;

    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    // 1. Hash the provided refresh token.
    let token_hash = hash_refresh_token(&input.refresh_token);

    // 2. Find matching active session.
    let session = SessionRepo::find_active_by_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    // 3. Revoke old session (token rotation).
    SessionRepo::revoke(&state.pool, session.id).await?;

    // 4. Find the guest.
    let guest = GuestRepo::find_by_id(&state.pool, session.guest_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Guest no longer exists".into())))?;

    // 5. Generate new tokens and create new session.
    let response = create_auth_response(&state, guest.id, &guest.full_name, &guest.email).await?;

    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Revoke all sessions for the authenticated guest. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, guest: AuthGuest) -> AppResult<StatusCode> {
    SessionRepo::revoke_all_for_guest(&state.pool, guest.guest_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate access + refresh tokens, persist a session row, and build the response.
async fn create_auth_response(
    state: &AppState,
    guest_id: DbId,
    full_name: &str,
    email: &str,
) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(guest_id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    SessionRepo::create(&state.pool, guest_id, &refresh_hash, expires_at).await?;

    let expires_in = state.config.jwt.access_token_expiry_mins * 60;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in,
        guest: GuestInfo {
            id: guest_id,
            full_name: full_name.to_string(),
            email: email.to_string(),
        },
    })
}
