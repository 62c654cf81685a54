//! Cabin catalog model.

use serde::Serialize;
use sqlx::FromRow;
use tamarack_core::types::{DbId, Money, Timestamp};

/// A row from the `cabins` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Cabin {
    pub id: DbId,
    pub created_at: Timestamp,
    pub name: String,
    pub max_capacity: i32,
    pub regular_price: Money,
    pub discount: Money,
    pub description: String,
}
