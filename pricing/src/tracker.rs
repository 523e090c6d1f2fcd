//! SurgeTracker
//!
//! Owns the authoritative per-flight surge state and writes every transition
//! through to a `PricingStore`. All transitions run behind one async mutex:
//! read-modify-write must be atomic per flight, because two interleaved
//! attempts could each observe "2 tracked attempts" and neither would
//! activate the surge despite 3 attempts occurring.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::model::{FlightPricing, SurgeConfig, apply_surge};
use crate::store::PricingStore;

/// Outcome of recording one booking attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptOutcome {
    pub surge_percentage: u32,
    pub attempts_count: usize,
}

/// A priced quote for one flight at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quoted {
    pub price: u64,
    pub surge_percentage: u32,
}

pub struct SurgeTracker<S: PricingStore> {
    cfg: SurgeConfig,

    /// Authoritative surge state per flight id. Single copy, single lock.
    states: Mutex<HashMap<String, FlightPricing>>,

    store: Arc<S>,
}

impl<S: PricingStore> SurgeTracker<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, SurgeConfig::default())
    }

    pub fn with_config(store: Arc<S>, cfg: SurgeConfig) -> Self {
        Self {
            cfg,
            states: Mutex::new(HashMap::new()),
            store,
        }
    }

    pub fn config(&self) -> &SurgeConfig {
        &self.cfg
    }

    /// Record a booking attempt for `flight_id` at `now_ms` and run the
    /// activation state machine. Unknown flight ids start a fresh state.
    pub async fn record_attempt(
        &self,
        flight_id: &str,
        now_ms: u64,
    ) -> anyhow::Result<AttemptOutcome> {
        let mut states = self.states.lock().await;
        let entry = self.load_or_create(&mut states, flight_id).await?;

        let was_active = entry.surge.is_active();
        entry.surge.on_attempt(&self.cfg, now_ms);

        match (was_active, entry.surge.is_active()) {
            (false, true) => info!(
                flight_id,
                percentage = entry.surge.percentage(),
                "surge activated"
            ),
            (true, false) => info!(flight_id, "surge window elapsed, attempt tracking restarted"),
            _ => {}
        }

        self.store.save(entry).await?;

        Ok(AttemptOutcome {
            surge_percentage: entry.surge.percentage(),
            attempts_count: entry.surge.attempts_count(),
        })
    }

    /// Price `flight_id` at `now_ms`.
    ///
    /// A surge past its 10-minute window is cleared here as a persisted side
    /// effect before the base price is returned; the clear is idempotent, so
    /// repeated queries at the same instant quote the same price.
    pub async fn effective_price(
        &self,
        base_price: u64,
        flight_id: &str,
        now_ms: u64,
    ) -> anyhow::Result<Quoted> {
        let mut states = self.states.lock().await;
        let entry = self.load_or_create(&mut states, flight_id).await?;

        if entry.surge.clear_if_stale(&self.cfg, now_ms) {
            info!(flight_id, "stale surge cleared on price query");
            self.store.save(entry).await?;
        }

        let surge_percentage = entry.surge.percentage();
        Ok(Quoted {
            price: apply_surge(base_price, surge_percentage),
            surge_percentage,
        })
    }

    async fn load_or_create<'a>(
        &self,
        states: &'a mut HashMap<String, FlightPricing>,
        flight_id: &str,
    ) -> anyhow::Result<&'a mut FlightPricing> {
        match states.entry(flight_id.to_string()) {
            Entry::Occupied(occupied) => Ok(occupied.into_mut()),
            Entry::Vacant(vacant) => {
                let loaded = self
                    .store
                    .load(flight_id)
                    .await?
                    .unwrap_or_else(|| FlightPricing::new(flight_id));
                Ok(vacant.insert(loaded))
            }
        }
    }
}
