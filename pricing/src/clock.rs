/// Wall-clock seam.
///
/// The tracker itself takes explicit `now_ms` timestamps so its transitions
/// stay deterministic; callers that live on real time read through this.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

/// System wall clock (ms since the Unix epoch).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        chrono::Utc::now().timestamp_millis().max(0) as u64
    }
}
