use tracing::Span;

use super::TraceId;

/// Root span for one booking flow (flight lookup → pricing → debit → record).
pub fn booking_span(trace_id: &TraceId) -> Span {
    tracing::info_span!("booking", trace_id = %trace_id)
}

/// Root span for one booking-attempt / surge-tracking flow.
pub fn attempt_span(trace_id: &TraceId) -> Span {
    tracing::info_span!("attempt", trace_id = %trace_id)
}
