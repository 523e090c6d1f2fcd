use serde::{Deserialize, Serialize};

/// One sellable flight. `base_price` is the undiscounted fare; surge markup
/// is applied on top of it by the pricing tracker at quote time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    pub flight_id: String,
    pub airline: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub base_price: u64,
    /// Local departure time, "HH:MM".
    pub departure_time: String,
    /// Local arrival time, "HH:MM".
    pub arrival_time: String,
    /// Human-readable duration, e.g. "2h 30m".
    pub duration: String,
}
