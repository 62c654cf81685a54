//! Booking repository integration tests: creation defaults, owner-scoped
//! queries, guest-editable updates, deletion, and occupied-date listing.

use chrono::NaiveDate;
use sqlx::PgPool;
use tamarack_core::types::DbId;
use tamarack_db::models::booking::{CreateBooking, UpdateBookingPatch};
use tamarack_db::models::guest::CreateGuest;
use tamarack_db::repositories::{BookingRepo, CabinRepo, GuestRepo};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn seed_guest(pool: &PgPool, email: &str) -> DbId {
    GuestRepo::create(
        pool,
        &CreateGuest {
            full_name: "Test Guest".into(),
            email: email.into(),
            password_hash: "$argon2id$fake".into(),
        },
    )
    .await
    .unwrap()
    .id
}

async fn seed_cabin(pool: &PgPool) -> DbId {
    let row: (DbId,) = sqlx::query_as(
        "INSERT INTO cabins (name, max_capacity, regular_price, discount, description)
         VALUES ('Pine Hollow', 6, 100, 10, 'A quiet spot') RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap();
    row.0
}

fn booking_input(cabin_id: DbId, guest_id: DbId) -> CreateBooking {
    CreateBooking {
        cabin_id,
        guest_id,
        start_date: date(2026, 9, 1),
        end_date: date(2026, 9, 4),
        num_nights: 3,
        num_guests: 2,
        cabin_price: 270,
        observations: "no pets".into(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_applies_fixed_defaults(pool: PgPool) {
    let guest_id = seed_guest(&pool, "a@test.dev").await;
    let cabin_id = seed_cabin(&pool).await;

    let booking = BookingRepo::create(&pool, &booking_input(cabin_id, guest_id))
        .await
        .unwrap();

    assert_eq!(booking.status, "unconfirmed");
    assert!(!booking.is_paid);
    assert!(!booking.has_breakfast);
    assert_eq!(booking.extras_price, 0);
    assert_eq!(booking.cabin_price, 270);
    assert_eq!(booking.total_price, 270, "total must equal the cabin price");
    assert_eq!(booking.num_nights, 3);
    assert_eq!(booking.observations, "no pets");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_id_returns_none_for_unknown(pool: PgPool) {
    assert!(BookingRepo::find_by_id(&pool, 9999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_by_guest_is_owner_scoped_and_newest_first(pool: PgPool) {
    let owner = seed_guest(&pool, "owner@test.dev").await;
    let other = seed_guest(&pool, "other@test.dev").await;
    let cabin_id = seed_cabin(&pool).await;

    let mut early = booking_input(cabin_id, owner);
    early.start_date = date(2026, 7, 1);
    early.end_date = date(2026, 7, 4);
    BookingRepo::create(&pool, &early).await.unwrap();

    let late = booking_input(cabin_id, owner);
    BookingRepo::create(&pool, &late).await.unwrap();

    BookingRepo::create(&pool, &booking_input(cabin_id, other))
        .await
        .unwrap();

    let bookings = BookingRepo::list_by_guest(&pool, owner).await.unwrap();
    assert_eq!(bookings.len(), 2);
    assert!(bookings.iter().all(|b| b.guest_id == owner));
    assert_eq!(bookings[0].start_date, date(2026, 9, 1));
    assert_eq!(bookings[1].start_date, date(2026, 7, 1));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_touches_only_guest_editable_fields(pool: PgPool) {
    let guest_id = seed_guest(&pool, "a@test.dev").await;
    let cabin_id = seed_cabin(&pool).await;
    let booking = BookingRepo::create(&pool, &booking_input(cabin_id, guest_id))
        .await
        .unwrap();

    let updated = BookingRepo::update_guest_fields(
        &pool,
        booking.id,
        &UpdateBookingPatch {
            num_guests: 4,
            observations: "two dogs".into(),
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.num_guests, 4);
    assert_eq!(updated.observations, "two dogs");
    // Everything else is untouched.
    assert_eq!(updated.total_price, booking.total_price);
    assert_eq!(updated.status, booking.status);
    assert_eq!(updated.start_date, booking.start_date);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_exactly_one_row(pool: PgPool) {
    let guest_id = seed_guest(&pool, "a@test.dev").await;
    let cabin_id = seed_cabin(&pool).await;
    let booking = BookingRepo::create(&pool, &booking_input(cabin_id, guest_id))
        .await
        .unwrap();

    let removed = BookingRepo::delete(&pool, booking.id).await.unwrap();
    assert_eq!(removed, 1);
    assert!(BookingRepo::find_by_id(&pool, booking.id)
        .await
        .unwrap()
        .is_none());

    // Repeating the delete is a no-op.
    let removed_again = BookingRepo::delete(&pool, booking.id).await.unwrap();
    assert_eq!(removed_again, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn current_bookings_exclude_finished_stays(pool: PgPool) {
    let guest_id = seed_guest(&pool, "a@test.dev").await;
    let cabin_id = seed_cabin(&pool).await;

    let mut past = booking_input(cabin_id, guest_id);
    past.start_date = date(2026, 1, 1);
    past.end_date = date(2026, 1, 4);
    BookingRepo::create(&pool, &past).await.unwrap();

    let current = booking_input(cabin_id, guest_id);
    BookingRepo::create(&pool, &current).await.unwrap();

    let bookings = BookingRepo::list_current_by_cabin(&pool, cabin_id, date(2026, 8, 1))
        .await
        .unwrap();

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].start_date, date(2026, 9, 1));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cabin_catalog_orders_by_effective_rate(pool: PgPool) {
    sqlx::query(
        "INSERT INTO cabins (name, max_capacity, regular_price, discount, description)
         VALUES ('Expensive', 4, 500, 0, ''), ('Bargain', 2, 120, 60, '')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let cabins = CabinRepo::list(&pool).await.unwrap();
    assert_eq!(cabins.len(), 2);
    assert_eq!(cabins[0].name, "Bargain");
    assert_eq!(cabins[1].name, "Expensive");
}
