use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Sliding window of booking-attempt timestamps (ms), ordered by time.
///
/// Entries aged `max_age_ms` or more relative to the latest recorded attempt
/// are evicted, so the window never holds stale attempts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptWindow {
    timestamps: VecDeque<u64>,
}

impl AttemptWindow {
    pub fn new() -> Self {
        Self {
            timestamps: VecDeque::new(),
        }
    }

    /// Window holding a single attempt at `ts_ms`.
    pub fn singleton(ts_ms: u64) -> Self {
        let mut window = Self::new();
        window.timestamps.push_back(ts_ms);
        window
    }

    /// Record an attempt at `now_ms` and return the resulting count.
    pub fn record(&mut self, now_ms: u64, max_age_ms: u64) -> usize {
        self.evict_old(now_ms, max_age_ms);
        self.timestamps.push_back(now_ms);
        self.timestamps.len()
    }

    fn evict_old(&mut self, now_ms: u64, max_age_ms: u64) {
        while let Some(front) = self.timestamps.front() {
            if now_ms.saturating_sub(*front) >= max_age_ms {
                self.timestamps.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}
