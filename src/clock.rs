// ⏰ Clock - Injectable time source
//
// Loan stamping and overdue detection are the only operations that read the
// clock. Catalogue::new() wires in the wall clock; tests and demos inject a
// ManualClock so date-dependent behavior is deterministic instead of
// sleep-based.

use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, RwLock};

// ============================================================================
// CLOCK TRAIT
// ============================================================================

/// Time source for loan timestamps and overdue checks
pub trait Clock: Send + Sync {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;
}

// ============================================================================
// SYSTEM CLOCK
// ============================================================================

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// ============================================================================
// MANUAL CLOCK
// ============================================================================

/// Manually driven clock. Handles are cheap clones sharing one instant, so
/// a test keeps one handle and hands the other to the catalogue.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<RwLock<DateTime<Utc>>>,
}

impl ManualClock {
    /// Create a clock frozen at the given instant
    pub fn new(start: DateTime<Utc>) -> Self {
        ManualClock {
            now: Arc::new(RwLock::new(start)),
        }
    }

    /// Jump to an absolute instant
    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.write().unwrap() = to;
    }

    /// Move the clock forward (or backward, with a negative duration)
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.write().unwrap();
        *now = *now + by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap()
    }
}

// ============================================================================
// TESTS
// ============================================================================
