//! Repository for the `guest_sessions` table (refresh tokens).

use sqlx::PgPool;
use tamarack_core::types::{DbId, Timestamp};

use crate::models::guest_session::GuestSession;

const COLUMNS: &str = "id, created_at, guest_id, refresh_token_hash, expires_at, revoked_at";

/// Provides refresh-token session storage.
pub struct SessionRepo;

impl SessionRepo {
    /// Create a session for a freshly issued refresh token.
    pub async fn create(
        pool: &PgPool,
        guest_id: DbId,
        refresh_token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<GuestSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO guest_sessions (guest_id, refresh_token_hash, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GuestSession>(&query)
            .bind(guest_id)
            .bind(refresh_token_hash)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find the live session matching a refresh token hash.
    ///
    /// Revoked or expired sessions are not returned.
    pub async fn find_active_by_token_hash(
        pool: &PgPool,
        refresh_token_hash: &str,
    ) -> Result<Option<GuestSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM guest_sessions
             WHERE refresh_token_hash = $1
               AND revoked_at IS NULL
               AND expires_at > now()"
        );
        sqlx::query_as::<_, GuestSession>(&query)
            .bind(refresh_token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Revoke a session (token rotation).
    pub async fn revoke(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE guest_sessions SET revoked_at = now() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Revoke every live session of a guest (logout).
    pub async fn revoke_all_for_guest(pool: &PgPool, guest_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE guest_sessions SET revoked_at = now()
             WHERE guest_id = $1 AND revoked_at IS NULL",
        )
        .bind(guest_id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
