pub mod memory;
pub mod sqlite_store;

pub use memory::MemoryPricingStore;
pub use sqlite_store::SqlitePricingStore;

use crate::model::FlightPricing;

/// Keyed persistence for per-flight surge state.
///
/// The tracker holds the authoritative copy behind one lock and writes
/// through on every transition; stores only need durable load/save per key.
#[async_trait::async_trait]
pub trait PricingStore: Send + Sync {
    async fn load(&self, flight_id: &str) -> anyhow::Result<Option<FlightPricing>>;
    async fn save(&self, pricing: &FlightPricing) -> anyhow::Result<()>;
}
