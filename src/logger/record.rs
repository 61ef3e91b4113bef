//! Heartbeat Record Module
//!
//! Formats and parses individual log lines.

use chrono::Local;

use crate::logger::TIMESTAMP_FORMAT;

// == Heartbeat Record ==
/// A single heartbeat log record.
///
/// Records exist only long enough to be serialized to one line of the log
/// file; nothing retains them in memory after the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartbeatRecord {
    /// Local wall-clock time the record was created, pre-rendered
    pub timestamp: String,
    /// Build version tag, written without its `v` prefix
    pub version: String,
    /// Free-form message text (no embedded newlines)
    pub message: String,
}

impl HeartbeatRecord {
    // == Constructor ==
    /// Creates a record stamped with the current local wall-clock time.
    pub fn now(version: &str, message: &str) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            version: version.to_string(),
            message: message.to_string(),
        }
    }

    // == Formatting ==
    /// Renders the record as one log line, without a trailing newline.
    ///
    /// Format: `<timestamp> v<version> <message>`
    pub fn to_line(&self) -> String {
        format!("{} v{} {}", self.timestamp, self.version, self.message)
    }

    // == Parsing ==
    /// Parses a log line back into a record.
    ///
    /// Splits on the first two spaces: the first token is the timestamp, the
    /// second a `v`-prefixed version tag, the remainder the message. Returns
    /// `None` when the line does not carry both leading tokens. The service
    /// never reads its own log; parsing exists for tests and tooling.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.splitn(3, ' ');
        let timestamp = parts.next()?;
        let version = parts.next()?.strip_prefix('v')?;
        let message = parts.next().unwrap_or("");

        if timestamp.is_empty() || version.is_empty() {
            return None;
        }

        Some(Self {
            timestamp: timestamp.to_string(),
            version: version.to_string(),
            message: message.to_string(),
        })
    }
}
