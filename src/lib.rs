//! Heartbeatd - A minimal periodic-heartbeat logging service
//!
//! Appends a timestamped, version-tagged line to an append-only log file on
//! start, on every timer tick, and on stop.

pub mod config;
pub mod error;
pub mod logger;
pub mod scheduler;
pub mod service;

pub use config::Config;
pub use logger::HeartbeatLog;
pub use service::{HeartbeatService, ServiceState};
