use serde::{Deserialize, Serialize};

/// Verdict on one timestamp stream of a sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimestampStatus {
    /// Every timestamp of the stream is zero.
    NotAvailable,
    /// At least one timestamp is smaller than its predecessor.
    NotMonotonic,
    Good,
}

impl TimestampStatus {
    pub fn is_available(self) -> bool {
        self != TimestampStatus::NotAvailable
    }

    pub fn is_monotonic(self) -> bool {
        self != TimestampStatus::NotMonotonic
    }
}

/// Single forward pass classifier for one timestamp stream (depth or color).
///
/// Equal consecutive timestamps are accepted: the stream only has to be non-decreasing.
#[derive(Clone, Debug)]
pub struct TimestampTracker {
    last_seen: u64,
    any_available: bool,
    monotonic: bool,
}

impl Default for TimestampTracker {
    fn default() -> Self {
        Self {
            last_seen: 0,
            any_available: false,
            monotonic: true,
        }
    }
}

impl TimestampTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, timestamp: u64) {
        if timestamp > 0 {
            self.any_available = true;
        }
        if timestamp < self.last_seen {
            self.monotonic = false;
        }
        self.last_seen = timestamp;
    }

    pub fn status(&self) -> TimestampStatus {
        match (self.any_available, self.monotonic) {
            (false, _) => TimestampStatus::NotAvailable,
            (true, true) => TimestampStatus::Good,
            (true, false) => TimestampStatus::NotMonotonic,
        }
    }
}
