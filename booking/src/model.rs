use serde::{Deserialize, Serialize};

use inventory::Flight;

use crate::pnr::Pnr;

/// A confirmed booking. Flight details are denormalized at booking time so
/// the record stays meaningful if the catalog changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub pnr: Pnr,
    pub passenger_name: String,
    pub flight_id: String,
    pub airline: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub final_price: u64,
    pub booked_at_ms: u64,
    pub departure_time: String,
    pub arrival_time: String,
}

/// Booking plus the wallet balance left after paying for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingReceipt {
    pub booking: Booking,
    pub wallet_balance: u64,
}

/// Catalog entry joined with its current surge-adjusted fare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FareView {
    pub flight: Flight,
    pub current_price: u64,
    pub surge_percentage: u32,
}

/// Result of one tracked booking attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptQuote {
    pub flight_id: String,
    pub base_price: u64,
    pub current_price: u64,
    pub surge_percentage: u32,
    pub attempts_count: usize,
}
