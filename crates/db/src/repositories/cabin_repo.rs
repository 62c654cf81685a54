//! Repository for the `cabins` table.

use sqlx::PgPool;
use tamarack_core::types::DbId;

use crate::models::cabin::Cabin;

/// Column list for cabins queries.
const COLUMNS: &str = "id, created_at, name, max_capacity, regular_price, discount, description";

/// Read access to the cabin catalog. Cabins are managed by staff tooling;
/// the guest API only reads them.
pub struct CabinRepo;

impl CabinRepo {
    /// List all cabins, cheapest effective rate first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Cabin>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cabins
             ORDER BY regular_price - discount ASC, id ASC"
        );
        sqlx::query_as::<_, Cabin>(&query).fetch_all(pool).await
    }

    /// Find a cabin by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Cabin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cabins WHERE id = $1");
        sqlx::query_as::<_, Cabin>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
