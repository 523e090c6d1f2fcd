//! Booking orchestration: catalog lookup, surge-adjusted pricing, wallet
//! debit, and the booking archive, glued into one service.

pub mod error;
pub mod model;
pub mod pnr;
pub mod service;
pub mod store;

pub use error::BookingError;
pub use model::{AttemptQuote, Booking, BookingReceipt, FareView};
pub use pnr::{Pnr, PnrGenerator, UuidPnrGenerator};
pub use service::BookingService;
pub use store::{BookingStore, MemoryBookingStore};
