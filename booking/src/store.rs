use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::model::Booking;
use crate::pnr::Pnr;

/// Booking archive.
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn put(&self, booking: Booking) -> anyhow::Result<()>;

    /// All bookings, newest first.
    async fn list(&self) -> anyhow::Result<Vec<Booking>>;

    async fn find_by_pnr(&self, pnr: &Pnr) -> anyhow::Result<Option<Booking>>;
}

/// In-memory `BookingStore`.
#[derive(Default)]
pub struct MemoryBookingStore {
    inner: Mutex<Vec<Booking>>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn put(&self, booking: Booking) -> anyhow::Result<()> {
        self.inner.lock().await.push(booking);
        Ok(())
    }

    async fn list(&self) -> anyhow::Result<Vec<Booking>> {
        let mut bookings = self.inner.lock().await.clone();
        bookings.sort_by(|a, b| b.booked_at_ms.cmp(&a.booked_at_ms));
        Ok(bookings)
    }

    async fn find_by_pnr(&self, pnr: &Pnr) -> anyhow::Result<Option<Booking>> {
        Ok(self
            .inner
            .lock()
            .await
            .iter()
            .find(|b| &b.pnr == pnr)
            .cloned())
    }
}
