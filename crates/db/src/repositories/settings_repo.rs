//! Repository for the single-row `settings` table.

use sqlx::PgPool;

use crate::models::settings::Settings;

const COLUMNS: &str =
    "id, min_booking_length, max_booking_length, max_guests_per_booking, breakfast_price";

/// Read access to the booking settings. Seeded by migration, edited by
/// staff tooling.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Fetch the settings row.
    pub async fn get(pool: &PgPool) -> Result<Settings, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Settings>(&query).fetch_one(pool).await
    }
}
