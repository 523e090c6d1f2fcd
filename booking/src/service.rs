//! BookingService
//!
//! The demo's front door: wires the flight catalog, the surge tracker, the
//! wallet, and the booking archive together. Each flow reads the clock once
//! so every decision inside it sees the same instant.

use std::sync::Arc;

use tracing::{Instrument, info};

use common::logger::{TraceId, attempt_span, booking_span};
use inventory::{FlightQuery, FlightStore};
use pricing::{Clock, PricingStore, SurgeTracker, apply_surge};
use wallet::{DEFAULT_USER, Transaction, WalletManager, WalletStore};

use crate::error::BookingError;
use crate::model::{AttemptQuote, Booking, BookingReceipt, FareView};
use crate::pnr::{Pnr, PnrGenerator};
use crate::store::BookingStore;

pub struct BookingService<F, P, W, B>
where
    F: FlightStore,
    P: PricingStore,
    W: WalletStore,
    B: BookingStore,
{
    flights: Arc<F>,
    tracker: SurgeTracker<P>,
    wallets: WalletManager<W>,
    bookings: Arc<B>,
    pnr: Arc<dyn PnrGenerator>,
    clock: Arc<dyn Clock>,
}

impl<F, P, W, B> BookingService<F, P, W, B>
where
    F: FlightStore,
    P: PricingStore,
    W: WalletStore,
    B: BookingStore,
{
    pub fn new(
        flights: Arc<F>,
        tracker: SurgeTracker<P>,
        wallets: WalletManager<W>,
        bookings: Arc<B>,
        pnr: Arc<dyn PnrGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            flights,
            tracker,
            wallets,
            bookings,
            pnr,
            clock,
        }
    }

    /// Book a seat for `passenger_name` on `flight_id` at the current
    /// surge-adjusted fare, paying from the demo wallet.
    pub async fn book(
        &self,
        passenger_name: &str,
        flight_id: &str,
    ) -> Result<BookingReceipt, BookingError> {
        let trace_id = TraceId::new();
        let now_ms = self.clock.now_ms();

        async move {
            let flight = self
                .flights
                .find(flight_id)
                .await?
                .ok_or_else(|| BookingError::FlightNotFound(flight_id.to_string()))?;

            let quoted = self
                .tracker
                .effective_price(flight.base_price, flight_id, now_ms)
                .await?;

            let description = format!(
                "Flight booking - {} ({} to {})",
                flight.flight_id, flight.departure_city, flight.arrival_city
            );
            let wallet_balance = self
                .wallets
                .debit(DEFAULT_USER, quoted.price, description, now_ms)
                .await?;

            let booking = Booking {
                pnr: self.pnr.generate(),
                passenger_name: passenger_name.to_string(),
                flight_id: flight.flight_id.clone(),
                airline: flight.airline.clone(),
                departure_city: flight.departure_city.clone(),
                arrival_city: flight.arrival_city.clone(),
                final_price: quoted.price,
                booked_at_ms: now_ms,
                departure_time: flight.departure_time.clone(),
                arrival_time: flight.arrival_time.clone(),
            };
            self.bookings.put(booking.clone()).await?;

            info!(
                pnr = %booking.pnr,
                flight_id,
                final_price = booking.final_price,
                surge_percentage = quoted.surge_percentage,
                "booking confirmed"
            );

            Ok(BookingReceipt {
                booking,
                wallet_balance,
            })
        }
        .instrument(booking_span(&trace_id))
        .await
    }

    /// Track a booking attempt for `flight_id` and quote the resulting fare.
    pub async fn record_attempt(&self, flight_id: &str) -> Result<AttemptQuote, BookingError> {
        let trace_id = TraceId::new();
        let now_ms = self.clock.now_ms();

        async move {
            let flight = self
                .flights
                .find(flight_id)
                .await?
                .ok_or_else(|| BookingError::FlightNotFound(flight_id.to_string()))?;

            let outcome = self.tracker.record_attempt(flight_id, now_ms).await?;

            Ok(AttemptQuote {
                flight_id: flight.flight_id,
                base_price: flight.base_price,
                current_price: apply_surge(flight.base_price, outcome.surge_percentage),
                surge_percentage: outcome.surge_percentage,
                attempts_count: outcome.attempts_count,
            })
        }
        .instrument(attempt_span(&trace_id))
        .await
    }

    /// Catalog search with the surge-adjusted fare for each hit. Stale
    /// surges encountered here are cleared as part of the price query.
    pub async fn search_fares(&self, query: &FlightQuery) -> Result<Vec<FareView>, BookingError> {
        let now_ms = self.clock.now_ms();
        let flights = self.flights.search(query).await?;

        let mut fares = Vec::with_capacity(flights.len());
        for flight in flights {
            let quoted = self
                .tracker
                .effective_price(flight.base_price, &flight.flight_id, now_ms)
                .await?;
            fares.push(FareView {
                flight,
                current_price: quoted.price,
                surge_percentage: quoted.surge_percentage,
            });
        }

        Ok(fares)
    }

    /// All bookings, newest first.
    pub async fn bookings(&self) -> Result<Vec<Booking>, BookingError> {
        Ok(self.bookings.list().await?)
    }

    pub async fn find_by_pnr(&self, pnr: &Pnr) -> Result<Option<Booking>, BookingError> {
        Ok(self.bookings.find_by_pnr(pnr).await?)
    }

    pub async fn wallet_balance(&self) -> Result<u64, BookingError> {
        Ok(self.wallets.balance(DEFAULT_USER).await?)
    }

    /// Add money to the demo wallet.
    pub async fn top_up(&self, amount: u64) -> Result<u64, BookingError> {
        let balance = self
            .wallets
            .credit(DEFAULT_USER, amount, "Wallet top-up", self.clock.now_ms())
            .await?;
        Ok(balance)
    }

    /// The latest `limit` wallet transactions, newest first.
    pub async fn recent_transactions(
        &self,
        limit: usize,
    ) -> Result<Vec<Transaction>, BookingError> {
        Ok(self.wallets.recent_transactions(DEFAULT_USER, limit).await?)
    }
}
