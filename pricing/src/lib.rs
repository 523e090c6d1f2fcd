//! Surge-pricing tracker.
//!
//! Consumes booking-attempt events keyed by flight id and maintains, per
//! flight, a sliding window of attempt timestamps plus a surge state. The
//! state machine is a two-phase hysteresis: a 5-minute attempt window governs
//! activation sensitivity, a 10-minute surge window governs surge duration.

pub mod clock;
pub mod model;
pub mod store;
pub mod tracker;
pub mod window;

pub use clock::{Clock, SystemClock};
pub use model::{FlightPricing, Surge, SurgeConfig, apply_surge};
pub use store::PricingStore;
pub use tracker::{AttemptOutcome, Quoted, SurgeTracker};
