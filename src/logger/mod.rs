//! Logger Module
//!
//! Provides the append-only heartbeat log: one timestamped, version-tagged
//! line per call, each written with an independent open-append-close cycle.

mod record;
mod writer;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use record::HeartbeatRecord;
pub use writer::HeartbeatLog;

// == Public Constants ==
/// Wall-clock timestamp format used for log lines.
///
/// A single whitespace-free token, so a log line always splits into exactly
/// three fields: timestamp, version tag, message.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";
