//! Live integration tests for gemfinder-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. They need `DATABASE_URL` pointing at a server the
//! harness can create databases on, so they are ignored by default:
//! `cargo test -p gemfinder-db -- --ignored`.

use chrono::Utc;
use gemfinder_core::{PlaceRecord, PlaceSink, PriceLevel};
use gemfinder_db::{insert_place_result, NewPlaceResult, PgPlaceSink};

fn make_record(name: &str) -> PlaceRecord {
    PlaceRecord {
        place_id: Some(format!("id-{name}")),
        name: name.to_string(),
        address: "1 Main St".to_string(),
        rating: Some(4.8),
        review_count: Some(12),
        category: None,
        primary_type: None,
        types: vec!["cafe".to_string()],
        location: None,
        maps_url: None,
        website_url: None,
        price_level: PriceLevel::Inexpensive,
        photos: Vec::new(),
        reviews: Vec::new(),
        query: "cafes".to_string(),
        fetched_at: Utc::now(),
    }
}

async fn count_rows(pool: &sqlx::PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM place_results WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap_or_else(|e| panic!("count_rows failed for '{name}': {e}"))
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn insert_place_result_returns_new_id(pool: sqlx::PgPool) {
    let row = NewPlaceResult::from_record(&make_record("Cafe One")).unwrap();
    let first = insert_place_result(&pool, &row).await.unwrap();
    let second = insert_place_result(&pool, &row).await.unwrap();
    assert_ne!(first, second);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn sink_appends_duplicates_without_upsert(pool: sqlx::PgPool) {
    let sink = PgPlaceSink::new(pool.clone());
    let record = make_record("Cafe Twice");

    sink.append(&record).await.unwrap();
    sink.append(&record).await.unwrap();

    assert_eq!(count_rows(&pool, "Cafe Twice").await, 2);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn stored_price_level_is_symbol(pool: sqlx::PgPool) {
    let sink = PgPlaceSink::new(pool.clone());
    sink.append(&make_record("Cheap Eats")).await.unwrap();

    let level: String =
        sqlx::query_scalar("SELECT price_level FROM place_results WHERE name = 'Cheap Eats'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(level, "$");
}
