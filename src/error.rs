//! Error types for the heartbeat service
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Heartbeat Error Enum ==
/// Unified error type for the heartbeat service.
///
/// The only failure the core produces on its own is an I/O failure on the
/// log file (create, open, or append). Configuration problems surface as
/// `Config` when a value cannot be used at startup.
#[derive(Error, Debug)]
pub enum HeartbeatError {
    /// Log file could not be created, opened, or written
    #[error("Log I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

// == Result Type Alias ==
/// Convenience Result type for the heartbeat service.
pub type Result<T> = std::result::Result<T, HeartbeatError>;
