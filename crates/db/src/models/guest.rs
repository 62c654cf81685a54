//! Guest account model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tamarack_core::types::{DbId, Timestamp};

/// A row from the `guests` table.
///
/// `password_hash` is never serialized into API responses.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Guest {
    pub id: DbId,
    pub created_at: Timestamp,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub nationality: Option<String>,
    pub country_flag: Option<String>,
    pub national_id: Option<String>,
}

/// DTO for creating a new guest account at signup.
#[derive(Debug, Deserialize)]
pub struct CreateGuest {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Patch applied by the profile update action.
#[derive(Debug, Clone)]
pub struct UpdateGuestProfile {
    pub nationality: String,
    pub country_flag: String,
    pub national_id: String,
}
