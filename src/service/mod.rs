//! Service Module
//!
//! Binds the append-only log and the periodic timer into a two-method
//! start/stop lifecycle.

mod heartbeat;
mod stats;

pub use heartbeat::{HeartbeatService, ServiceState};
pub use stats::{ServiceStats, StatsSnapshot};
