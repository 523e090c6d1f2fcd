//! Surge state for a single flight, plus the state-machine transitions.
//!
//! States: `Inactive` (attempts tracked in a sliding window) and `Active`
//! (markup in effect, attempts not tracked). The tagged form rules out the
//! invalid combination of a positive percentage with no activation time.

use serde::{Deserialize, Serialize};

use crate::window::AttemptWindow;

/// Tuning knobs for the surge state machine.
///
/// Defaults carry the production values; tests may shrink the windows.
#[derive(Debug, Clone)]
pub struct SurgeConfig {
    /// Sliding interval used to count booking attempts for activation.
    pub attempt_window_ms: u64,

    /// Fixed interval during which an activated surge remains in effect.
    pub surge_window_ms: u64,

    /// Number of attempts within the attempt window that triggers a surge.
    pub activation_threshold: usize,

    /// Markup applied on activation, as a percentage of base price.
    pub surge_percentage: u32,
}

impl Default for SurgeConfig {
    fn default() -> Self {
        Self {
            attempt_window_ms: 5 * 60 * 1000,
            surge_window_ms: 10 * 60 * 1000,
            activation_threshold: 3,
            surge_percentage: 10,
        }
    }
}

/// Surge state for one flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surge {
    /// No markup; booking attempts are tracked in a sliding window.
    Inactive { attempts: AttemptWindow },

    /// Markup in effect since `activated_at_ms`; attempts are not tracked.
    Active { percentage: u32, activated_at_ms: u64 },
}

impl Surge {
    /// Fresh state: inactive, no tracked attempts.
    pub fn idle() -> Self {
        Surge::Inactive {
            attempts: AttemptWindow::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Surge::Active { .. })
    }

    pub fn percentage(&self) -> u32 {
        match self {
            Surge::Inactive { .. } => 0,
            Surge::Active { percentage, .. } => *percentage,
        }
    }

    /// Attempts currently tracked. Always 0 while active: an observed surge
    /// freezes attempt bookkeeping until its window elapses.
    pub fn attempts_count(&self) -> usize {
        match self {
            Surge::Inactive { attempts } => attempts.len(),
            Surge::Active { .. } => 0,
        }
    }

    fn is_stale(&self, cfg: &SurgeConfig, now_ms: u64) -> bool {
        match self {
            Surge::Active {
                activated_at_ms, ..
            } => now_ms.saturating_sub(*activated_at_ms) >= cfg.surge_window_ms,
            Surge::Inactive { .. } => false,
        }
    }

    /// Apply one booking attempt at `now_ms`.
    pub fn on_attempt(&mut self, cfg: &SurgeConfig, now_ms: u64) {
        match self {
            Surge::Active {
                activated_at_ms, ..
            } => {
                if now_ms.saturating_sub(*activated_at_ms) >= cfg.surge_window_ms {
                    // Surge window over: restart attempt tracking with this
                    // attempt as the sole entry.
                    *self = Surge::Inactive {
                        attempts: AttemptWindow::singleton(now_ms),
                    };
                }
                // Otherwise: an observed surge is not extended or reset by
                // further attempts within its window.
            }
            Surge::Inactive { attempts } => {
                let count = attempts.record(now_ms, cfg.attempt_window_ms);
                if count >= cfg.activation_threshold {
                    *self = Surge::Active {
                        percentage: cfg.surge_percentage,
                        activated_at_ms: now_ms,
                    };
                }
            }
        }
    }

    /// Clear a surge whose window has elapsed. Returns true if state changed.
    ///
    /// This is the read-path mutation: price queries call it before quoting.
    pub fn clear_if_stale(&mut self, cfg: &SurgeConfig, now_ms: u64) -> bool {
        if self.is_stale(cfg, now_ms) {
            *self = Surge::idle();
            true
        } else {
            false
        }
    }
}

/// One tracked flight: the key plus its surge state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightPricing {
    pub flight_id: String,
    pub surge: Surge,
}

impl FlightPricing {
    pub fn new(flight_id: impl Into<String>) -> Self {
        Self {
            flight_id: flight_id.into(),
            surge: Surge::idle(),
        }
    }
}

/// Apply a surge markup to a base price, rounding half-up.
pub fn apply_surge(base_price: u64, percentage: u32) -> u64 {
    let price = base_price as f64 * (1.0 + f64::from(percentage) / 100.0);
    price.round() as u64
}
