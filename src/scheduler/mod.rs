//! Scheduler Module
//!
//! Owns the periodic timer that drives heartbeat ticks.

mod timer;

pub use timer::{arm, TimerHandle};
