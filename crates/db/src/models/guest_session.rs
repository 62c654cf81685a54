//! Refresh-token session model.

use sqlx::FromRow;
use tamarack_core::types::{DbId, Timestamp};

/// A row from the `guest_sessions` table.
///
/// Stores only the SHA-256 hash of the refresh token, never the token
/// itself.
#[derive(Debug, Clone, FromRow)]
pub struct GuestSession {
    pub id: DbId,
    pub created_at: Timestamp,
    pub guest_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
}
