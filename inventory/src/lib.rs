//! Flight catalog: the searchable set of flights the demo sells.

pub mod catalog;
pub mod model;
pub mod seed;

pub use catalog::{FlightQuery, FlightStore, MemoryFlightStore, SEARCH_RESULT_CAP};
pub use model::Flight;
pub use seed::seed_flights;
