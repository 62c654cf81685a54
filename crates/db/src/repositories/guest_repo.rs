//! Repository for the `guests` table.

use sqlx::PgPool;
use tamarack_core::types::DbId;

use crate::models::guest::{CreateGuest, Guest, UpdateGuestProfile};

/// Column list for guests queries.
const COLUMNS: &str = "id, created_at, full_name, email, password_hash, \
    nationality, country_flag, national_id";

/// Provides account and profile operations for guests.
pub struct GuestRepo;

impl GuestRepo {
    /// Create a new guest account, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGuest) -> Result<Guest, sqlx::Error> {
        let query = format!(
            "INSERT INTO guests (full_name, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a guest by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Guest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guests WHERE id = $1");
        sqlx::query_as::<_, Guest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a guest by email (login lookup).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Guest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guests WHERE email = $1");
        sqlx::query_as::<_, Guest>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Apply the profile patch to the guest matching `id`.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        patch: &UpdateGuestProfile,
    ) -> Result<Guest, sqlx::Error> {
        let query = format!(
            "UPDATE guests
             SET nationality = $2, country_flag = $3, national_id = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(id)
            .bind(&patch.nationality)
            .bind(&patch.country_flag)
            .bind(&patch.national_id)
            .fetch_one(pool)
            .await
    }
}
