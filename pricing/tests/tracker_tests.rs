use std::sync::Arc;

use pricing::store::MemoryPricingStore;
use pricing::{AttemptOutcome, SurgeTracker};

const SEC: u64 = 1_000;
const MIN: u64 = 60 * SEC;

fn tracker() -> SurgeTracker<MemoryPricingStore> {
    SurgeTracker::new(Arc::new(MemoryPricingStore::new()))
}

#[tokio::test]
async fn third_attempt_within_five_minutes_activates_surge() {
    let t = tracker();

    let a1 = t.record_attempt("AI101", 0).await.unwrap();
    assert_eq!(
        a1,
        AttemptOutcome {
            surge_percentage: 0,
            attempts_count: 1
        }
    );

    let a2 = t.record_attempt("AI101", 60 * SEC).await.unwrap();
    assert_eq!(a2.surge_percentage, 0);
    assert_eq!(a2.attempts_count, 2);

    let a3 = t.record_attempt("AI101", 120 * SEC).await.unwrap();
    assert_eq!(a3.surge_percentage, 10);
}

#[tokio::test]
async fn attempts_spaced_five_minutes_apart_never_activate() {
    let t = tracker();

    // Ten attempts, each exactly one attempt-window apart: every earlier
    // attempt has aged out by the time the next lands.
    for i in 0..10u64 {
        let out = t.record_attempt("UK202", i * 5 * MIN).await.unwrap();
        assert_eq!(out.surge_percentage, 0);
        assert_eq!(out.attempts_count, 1);
    }
}

#[tokio::test]
async fn attempt_at_exact_window_edge_does_not_count_the_oldest() {
    let t = tracker();

    t.record_attempt("SG303", 0).await.unwrap();
    t.record_attempt("SG303", 150 * SEC).await.unwrap();

    // The first attempt is exactly 5 minutes old now and falls out, so this
    // is the second tracked attempt, not the third.
    let out = t.record_attempt("SG303", 5 * MIN).await.unwrap();
    assert_eq!(out.surge_percentage, 0);
    assert_eq!(out.attempts_count, 2);
}

#[tokio::test]
async fn active_surge_prices_at_markup_within_window() {
    let t = tracker();

    t.record_attempt("AI101", 0).await.unwrap();
    t.record_attempt("AI101", 60 * SEC).await.unwrap();
    t.record_attempt("AI101", 120 * SEC).await.unwrap();

    let q = t.effective_price(2500, "AI101", 180 * SEC).await.unwrap();
    assert_eq!(q.price, 2750);
    assert_eq!(q.surge_percentage, 10);

    // Just inside the surge window (activated at 120s).
    let q = t
        .effective_price(2500, "AI101", 120 * SEC + 10 * MIN - 1)
        .await
        .unwrap();
    assert_eq!(q.price, 2750);
}

#[tokio::test]
async fn query_after_surge_window_returns_base_and_resets() {
    let t = tracker();

    t.record_attempt("AI101", 0).await.unwrap();
    t.record_attempt("AI101", 60 * SEC).await.unwrap();
    t.record_attempt("AI101", 120 * SEC).await.unwrap();

    // 10m1s after activation.
    let q = t.effective_price(2500, "AI101", 721 * SEC).await.unwrap();
    assert_eq!(q.price, 2500);
    assert_eq!(q.surge_percentage, 0);

    // The reset emptied the attempt window: one fresh attempt tracks alone.
    let out = t.record_attempt("AI101", 722 * SEC).await.unwrap();
    assert_eq!(out.surge_percentage, 0);
    assert_eq!(out.attempts_count, 1);
}

#[tokio::test]
async fn query_at_exactly_ten_minutes_is_stale() {
    let t = tracker();

    t.record_attempt("IN404", 0).await.unwrap();
    t.record_attempt("IN404", SEC).await.unwrap();
    t.record_attempt("IN404", 2 * SEC).await.unwrap();

    let q = t
        .effective_price(2800, "IN404", 2 * SEC + 10 * MIN)
        .await
        .unwrap();
    assert_eq!(q.price, 2800);
    assert_eq!(q.surge_percentage, 0);
}

#[tokio::test]
async fn effective_price_is_idempotent_at_fixed_instant() {
    let t = tracker();

    t.record_attempt("AI101", 0).await.unwrap();
    t.record_attempt("AI101", SEC).await.unwrap();
    t.record_attempt("AI101", 2 * SEC).await.unwrap();

    for _ in 0..3 {
        let q = t.effective_price(2500, "AI101", 3 * SEC).await.unwrap();
        assert_eq!(q.surge_percentage, 10);
        assert_eq!(q.price, 2750);
    }

    // Post-expiry: the stale reset happens once and further queries agree.
    for _ in 0..3 {
        let q = t.effective_price(2500, "AI101", 20 * MIN).await.unwrap();
        assert_eq!(q.surge_percentage, 0);
        assert_eq!(q.price, 2500);
    }
}

#[tokio::test]
async fn attempts_during_active_surge_are_not_tracked() {
    let t = tracker();

    t.record_attempt("AI101", 0).await.unwrap();
    t.record_attempt("AI101", SEC).await.unwrap();
    t.record_attempt("AI101", 2 * SEC).await.unwrap();

    // Hammering while active changes nothing.
    for i in 0..5u64 {
        let out = t.record_attempt("AI101", 3 * SEC + i).await.unwrap();
        assert_eq!(out.surge_percentage, 10);
        assert_eq!(out.attempts_count, 0);
    }

    // The surge window is anchored at activation (t=2s), not at the last
    // attempt: it still expires on schedule.
    let q = t
        .effective_price(2500, "AI101", 2 * SEC + 10 * MIN)
        .await
        .unwrap();
    assert_eq!(q.surge_percentage, 0);
}

#[tokio::test]
async fn attempt_after_surge_window_restarts_tracking_with_singleton() {
    let t = tracker();

    t.record_attempt("UK606", 0).await.unwrap();
    t.record_attempt("UK606", SEC).await.unwrap();
    t.record_attempt("UK606", 2 * SEC).await.unwrap();

    // First attempt past the surge window clears it and tracks only itself.
    let out = t
        .record_attempt("UK606", 2 * SEC + 10 * MIN)
        .await
        .unwrap();
    assert_eq!(out.surge_percentage, 0);
    assert_eq!(out.attempts_count, 1);

    // Two more within the window re-activate.
    t.record_attempt("UK606", 3 * SEC + 10 * MIN).await.unwrap();
    let out = t
        .record_attempt("UK606", 4 * SEC + 10 * MIN)
        .await
        .unwrap();
    assert_eq!(out.surge_percentage, 10);
}

#[tokio::test]
async fn flights_are_tracked_independently() {
    let t = tracker();

    t.record_attempt("AI101", 0).await.unwrap();
    t.record_attempt("AI101", SEC).await.unwrap();
    t.record_attempt("AI101", 2 * SEC).await.unwrap();

    t.record_attempt("UK202", 0).await.unwrap();

    let a = t.effective_price(2500, "AI101", 3 * SEC).await.unwrap();
    let b = t.effective_price(2200, "UK202", 3 * SEC).await.unwrap();
    assert_eq!(a.surge_percentage, 10);
    assert_eq!(b.surge_percentage, 0);
    assert_eq!(b.price, 2200);
}

#[tokio::test]
async fn unknown_flight_quotes_base_price() {
    let t = tracker();

    let q = t.effective_price(2100, "AI505", 0).await.unwrap();
    assert_eq!(q.price, 2100);
    assert_eq!(q.surge_percentage, 0);
}

#[tokio::test]
async fn state_survives_tracker_restart_via_store() {
    let store = Arc::new(MemoryPricingStore::new());

    {
        let t = SurgeTracker::new(Arc::clone(&store));
        t.record_attempt("AI717", 0).await.unwrap();
        t.record_attempt("AI717", SEC).await.unwrap();
        t.record_attempt("AI717", 2 * SEC).await.unwrap();
    }

    // A fresh tracker over the same store sees the active surge.
    let t = SurgeTracker::new(store);
    let q = t.effective_price(2600, "AI717", 3 * SEC).await.unwrap();
    assert_eq!(q.surge_percentage, 10);
    assert_eq!(q.price, 2860);
}
