//! Service Statistics Module
//!
//! Tracks heartbeat activity counters.

use std::sync::atomic::{AtomicU64, Ordering};

// == Service Stats ==
/// Heartbeat activity counters.
///
/// Shared between the timer task and the lifecycle caller, so the counters
/// are atomic.
#[derive(Debug, Default)]
pub struct ServiceStats {
    /// Number of timer ticks that fired
    ticks_fired: AtomicU64,
    /// Number of heartbeat writes that failed
    write_failures: AtomicU64,
}

// == Stats Snapshot ==
/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub ticks_fired: u64,
    pub write_failures: u64,
}

impl ServiceStats {
    // == Constructor ==
    /// Creates a new ServiceStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Tick ==
    /// Increments the fired-tick counter.
    pub fn record_tick(&self) {
        self.ticks_fired.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Write Failure ==
    /// Increments the failed-write counter.
    pub fn record_write_failure(&self) {
        self.write_failures.fetch_add(1, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Returns a point-in-time copy of the counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            ticks_fired: self.ticks_fired.load(Ordering::Relaxed),
            write_failures: self.write_failures.load(Ordering::Relaxed),
        }
    }
}
