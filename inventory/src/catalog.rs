use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::model::Flight;

/// Search results are capped at this many flights.
pub const SEARCH_RESULT_CAP: usize = 10;

/// Optional city filters for a catalog search. Each provided field matches
/// case-insensitively on any substring of the corresponding city name.
#[derive(Debug, Clone, Default)]
pub struct FlightQuery {
    pub departure_city: Option<String>,
    pub arrival_city: Option<String>,
}

impl FlightQuery {
    pub fn matches(&self, flight: &Flight) -> bool {
        city_matches(self.departure_city.as_deref(), &flight.departure_city)
            && city_matches(self.arrival_city.as_deref(), &flight.arrival_city)
    }
}

fn city_matches(filter: Option<&str>, city: &str) -> bool {
    match filter {
        Some(f) => city.to_lowercase().contains(&f.to_lowercase()),
        None => true,
    }
}

/// Keyed catalog storage.
#[async_trait]
pub trait FlightStore: Send + Sync {
    async fn find(&self, flight_id: &str) -> anyhow::Result<Option<Flight>>;

    /// Matching flights ordered by flight id, at most `SEARCH_RESULT_CAP`.
    async fn search(&self, query: &FlightQuery) -> anyhow::Result<Vec<Flight>>;

    async fn put(&self, flight: Flight) -> anyhow::Result<()>;
}

/// In-memory `FlightStore`.
#[derive(Default)]
pub struct MemoryFlightStore {
    inner: Mutex<HashMap<String, Flight>>,
}

impl MemoryFlightStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the given flights.
    pub async fn with_flights(flights: Vec<Flight>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.lock().await;
            for flight in flights {
                inner.insert(flight.flight_id.clone(), flight);
            }
        }
        store
    }
}

#[async_trait]
impl FlightStore for MemoryFlightStore {
    async fn find(&self, flight_id: &str) -> anyhow::Result<Option<Flight>> {
        Ok(self.inner.lock().await.get(flight_id).cloned())
    }

    async fn search(&self, query: &FlightQuery) -> anyhow::Result<Vec<Flight>> {
        let inner = self.inner.lock().await;

        let mut matches: Vec<Flight> = inner
            .values()
            .filter(|f| query.matches(f))
            .cloned()
            .collect();

        // HashMap iteration order is arbitrary; sort for a stable cap.
        matches.sort_by(|a, b| a.flight_id.cmp(&b.flight_id));
        matches.truncate(SEARCH_RESULT_CAP);

        Ok(matches)
    }

    async fn put(&self, flight: Flight) -> anyhow::Result<()> {
        self.inner
            .lock()
            .await
            .insert(flight.flight_id.clone(), flight);
        Ok(())
    }
}
