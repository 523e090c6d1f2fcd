use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::PricingStore;
use crate::model::FlightPricing;

/// In-memory `PricingStore` used by tests and demos.
#[derive(Default)]
pub struct MemoryPricingStore {
    inner: Mutex<HashMap<String, FlightPricing>>,
}

impl MemoryPricingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PricingStore for MemoryPricingStore {
    async fn load(&self, flight_id: &str) -> anyhow::Result<Option<FlightPricing>> {
        Ok(self.inner.lock().await.get(flight_id).cloned())
    }

    async fn save(&self, pricing: &FlightPricing) -> anyhow::Result<()> {
        self.inner
            .lock()
            .await
            .insert(pricing.flight_id.clone(), pricing.clone());
        Ok(())
    }
}
