use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    tamarack_db::health_check(&pool).await.unwrap();

    // Verify every table exists and is queryable.
    let tables = ["guests", "cabins", "settings", "bookings", "guest_sessions"];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert!(count.0 >= 0);
    }
}

/// The settings table is seeded with exactly one row.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_seeded(pool: PgPool) {
    let settings = tamarack_db::repositories::SettingsRepo::get(&pool)
        .await
        .unwrap();

    assert!(settings.min_booking_length >= 1);
    assert!(settings.max_booking_length > settings.min_booking_length);
    assert!(settings.max_guests_per_booking >= 1);
}
