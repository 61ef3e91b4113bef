//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Default log file path, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "heartbeatd.log";

/// Default heartbeat interval in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 5000;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the append-only heartbeat log file
    pub log_path: PathBuf,
    /// Heartbeat interval in milliseconds
    pub interval_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `HEARTBEAT_LOG_PATH` - Log file path (default: "heartbeatd.log")
    /// - `HEARTBEAT_INTERVAL_MS` - Heartbeat interval in ms (default: 5000)
    pub fn from_env() -> Self {
        Self {
            log_path: env::var("HEARTBEAT_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_PATH)),
            interval_ms: env::var("HEARTBEAT_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(DEFAULT_INTERVAL_MS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}
