//! Heartbeat Service Module
//!
//! The service lifecycle: "started" on start, "still running" on every timer
//! tick, "stopped" on stop.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::logger::HeartbeatLog;
use crate::scheduler::{arm, TimerHandle};
use crate::service::{ServiceStats, StatsSnapshot};

// == Service State ==
/// Lifecycle state of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Stopped,
    Running,
}

// == Heartbeat Service ==
/// Background service that appends a heartbeat line to the log on every
/// timer tick between `start` and `stop`.
///
/// The hosting lifecycle (a service manager adapter, a signal handler, a
/// test) calls `start` once and `stop` once; the timer does the rest.
#[derive(Debug)]
pub struct HeartbeatService {
    log: HeartbeatLog,
    interval: Duration,
    stats: Arc<ServiceStats>,
    state: ServiceState,
    timer: Option<TimerHandle>,
}

impl HeartbeatService {
    // == Constructors ==
    /// Creates a stopped service from configuration.
    ///
    /// The version tag written on every log line is the crate version.
    pub fn new(config: &Config) -> Self {
        Self::with_log(
            HeartbeatLog::new(config.log_path.clone(), env!("CARGO_PKG_VERSION")),
            Duration::from_millis(config.interval_ms),
        )
    }

    /// Creates a stopped service around an existing log and explicit tick
    /// interval.
    pub fn with_log(log: HeartbeatLog, interval: Duration) -> Self {
        Self {
            log,
            interval,
            stats: Arc::new(ServiceStats::new()),
            state: ServiceState::Stopped,
            timer: None,
        }
    }

    // == Start ==
    /// Starts the service: writes the "started" record, then arms the timer.
    ///
    /// A failure to write the "started" record propagates and leaves the
    /// service stopped with no timer armed. Calling start on a running
    /// service logs a warning and returns Ok.
    ///
    /// Tick policy: each tick records itself in the stats and appends one
    /// "still running" line. A failed heartbeat write is counted and
    /// reported but never disarms the schedule.
    pub fn start(&mut self) -> Result<()> {
        if self.state == ServiceState::Running {
            warn!("Heartbeat service already running");
            return Ok(());
        }

        self.log.append("started")?;

        let log = self.log.clone();
        let stats = Arc::clone(&self.stats);
        let handle = arm(self.interval, move || {
            stats.record_tick();
            if let Err(e) = log.append("still running") {
                stats.record_write_failure();
                error!("Heartbeat write failed: {}", e);
            }
        });

        self.timer = Some(handle);
        self.state = ServiceState::Running;
        info!(
            "Heartbeat service started (interval={}ms, file={:?})",
            self.interval.as_millis(),
            self.log.path()
        );
        Ok(())
    }

    // == Stop ==
    /// Stops the service: disarms the timer, then writes the "stopped"
    /// record.
    ///
    /// Only future ticks are cancelled; a tick already executing completes
    /// and is not awaited. The service transitions to Stopped even when the
    /// "stopped" write fails, so the error can propagate without leaving a
    /// live timer behind. Calling stop on a stopped service is a no-op.
    pub fn stop(&mut self) -> Result<()> {
        if self.state == ServiceState::Stopped {
            return Ok(());
        }

        if let Some(timer) = self.timer.take() {
            timer.disarm();
        }
        self.state = ServiceState::Stopped;

        self.log.append("stopped")?;
        info!("Heartbeat service stopped");
        Ok(())
    }

    // == Accessors ==
    /// Current lifecycle state.
    pub fn state(&self) -> ServiceState {
        self.state
    }

    /// Point-in-time activity counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// The log this service writes to.
    pub fn log(&self) -> &HeartbeatLog {
        &self.log
    }
}
