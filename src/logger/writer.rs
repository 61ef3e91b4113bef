//! Append Writer Module
//!
//! Owns the log file path and performs the actual file appends.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::logger::HeartbeatRecord;

// == Heartbeat Log ==
/// Append-only heartbeat log bound to a fixed file path and version tag.
///
/// Cloning is cheap and shares nothing but the path and tag; the file handle
/// is never held between calls.
#[derive(Debug, Clone)]
pub struct HeartbeatLog {
    path: PathBuf,
    version: String,
}

impl HeartbeatLog {
    // == Constructor ==
    /// Creates a log bound to `path` and `version`. Performs no I/O; the
    /// file is created on the first append.
    pub fn new(path: impl Into<PathBuf>, version: &str) -> Self {
        Self {
            path: path.into(),
            version: version.to_string(),
        }
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // == Append ==
    /// Appends one timestamped, version-tagged line for `message`.
    ///
    /// Each call is an independent open-write-close cycle: the file is
    /// created if absent, opened in append mode, and the handle is released
    /// on every exit path, including write failure. Existing lines are never
    /// truncated or reordered, and no buffering is carried across calls, so
    /// a crash loses at most the in-flight line.
    ///
    /// I/O failures propagate to the caller; nothing is retried or caught
    /// here.
    pub fn append(&self, message: &str) -> Result<()> {
        let record = HeartbeatRecord::now(&self.version, message);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", record.to_line())?;

        Ok(())
    }
}
