//! Periodic Timer Module
//!
//! Background task that fires a callback at a fixed interval until disarmed.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

// == Timer Handle ==
/// Handle to an armed periodic timer.
///
/// The handle owns the schedule: ticks keep firing until `disarm` is called.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    // == Disarm ==
    /// Cancels all future ticks.
    ///
    /// The abort lands at the timer task's next await point, so a callback
    /// that is already executing runs to completion. Nothing waits for it.
    pub fn disarm(self) {
        self.task.abort();
    }

    /// Whether the timer task is still live.
    pub fn is_armed(&self) -> bool {
        !self.task.is_finished()
    }
}

// == Arm ==
/// Arms a periodic timer that invokes `callback` once per `period` elapse.
///
/// The first tick fires one full period after arming, not immediately.
/// Missed ticks are skipped rather than replayed: if the host stalls past
/// one or more periods, the timer resumes on the next elapse without
/// catch-up. The callback is fire-and-forget; nothing it does can disarm
/// the schedule.
///
/// # Arguments
/// * `period` - Fixed interval between ticks
/// * `callback` - Invoked on the timer task on every tick
///
/// # Returns
/// A `TimerHandle` used to disarm the schedule.
pub fn arm<F>(period: Duration, mut callback: F) -> TimerHandle
where
    F: FnMut() + Send + 'static,
{
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first interval tick completes immediately; consume it so the
        // callback only runs on real period elapses.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            debug!("Timer tick");
            callback();
        }
    });

    TimerHandle { task }
}
