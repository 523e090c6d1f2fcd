use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;

use pricing::store::{PricingStore, SqlitePricingStore};
use pricing::{FlightPricing, Surge, SurgeTracker};

// One connection keeps every query on the same in-memory database.
async fn memory_store() -> SqlitePricingStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");

    let store = SqlitePricingStore::from_pool(pool);
    store.ensure_schema().await.expect("create schema");
    store
}

#[tokio::test]
async fn missing_flight_loads_as_none() {
    let store = memory_store().await;
    assert!(store.load("AI101").await.unwrap().is_none());
}

#[tokio::test]
async fn inactive_state_round_trips_with_attempts() {
    let store = memory_store().await;

    let mut pricing = FlightPricing::new("AI101");
    if let Surge::Inactive { attempts } = &mut pricing.surge {
        attempts.record(1_000, 300_000);
        attempts.record(2_000, 300_000);
    }

    store.save(&pricing).await.unwrap();

    let loaded = store.load("AI101").await.unwrap().unwrap();
    assert_eq!(loaded, pricing);
    assert_eq!(loaded.surge.attempts_count(), 2);
}

#[tokio::test]
async fn active_state_round_trips() {
    let store = memory_store().await;

    let pricing = FlightPricing {
        flight_id: "UK202".to_string(),
        surge: Surge::Active {
            percentage: 10,
            activated_at_ms: 120_000,
        },
    };

    store.save(&pricing).await.unwrap();

    let loaded = store.load("UK202").await.unwrap().unwrap();
    assert_eq!(loaded, pricing);
}

#[tokio::test]
async fn save_upserts_existing_row() {
    let store = memory_store().await;

    let mut pricing = FlightPricing::new("SG303");
    store.save(&pricing).await.unwrap();

    pricing.surge = Surge::Active {
        percentage: 10,
        activated_at_ms: 60_000,
    };
    store.save(&pricing).await.unwrap();

    let loaded = store.load("SG303").await.unwrap().unwrap();
    assert!(loaded.surge.is_active());

    pricing.surge = Surge::idle();
    store.save(&pricing).await.unwrap();

    let loaded = store.load("SG303").await.unwrap().unwrap();
    assert!(!loaded.surge.is_active());
    assert_eq!(loaded.surge.attempts_count(), 0);
}

#[tokio::test]
async fn tracker_runs_over_sqlite_store() {
    let store = Arc::new(memory_store().await);
    let tracker = SurgeTracker::new(store);

    tracker.record_attempt("IN404", 0).await.unwrap();
    tracker.record_attempt("IN404", 1_000).await.unwrap();
    let out = tracker.record_attempt("IN404", 2_000).await.unwrap();
    assert_eq!(out.surge_percentage, 10);

    let q = tracker.effective_price(2800, "IN404", 3_000).await.unwrap();
    assert_eq!(q.price, 3080);
}
