mod init;
mod spans;
mod trace_id;

pub use init::init_logger;
pub use spans::{attempt_span, booking_span};
pub use trace_id::TraceId;
