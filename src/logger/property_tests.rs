//! Property-Based Tests for the Logger Module
//!
//! Uses proptest to verify the line-format round-trip and append-ordering
//! properties.

use proptest::prelude::*;
use tempfile::TempDir;

use crate::logger::{HeartbeatLog, HeartbeatRecord};

// == Strategies ==
/// Generates dotted numeric version tags such as "0.0.0.2"
fn version_strategy() -> impl Strategy<Value = String> {
    "[0-9]{1,2}(\\.[0-9]{1,2}){0,3}".prop_map(|s| s)
}

/// Generates messages without embedded newlines, starting with a non-space
/// character
fn message_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 ]{0,63}".prop_map(|s| s)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // *For any* version tag and message, the formatted line splits back into
    // the tag and message in effect at write time.
    #[test]
    fn prop_line_roundtrip(version in version_strategy(), message in message_strategy()) {
        let record = HeartbeatRecord::now(&version, &message);
        let parsed = HeartbeatRecord::parse(&record.to_line()).expect("line should parse");

        prop_assert_eq!(parsed.timestamp, record.timestamp);
        prop_assert_eq!(parsed.version, version);
        prop_assert_eq!(parsed.message, message);
    }

    // *For any* sequence of append calls without concurrent writers, the file
    // contains exactly n lines in call order, each carrying its message.
    #[test]
    fn prop_append_preserves_order(messages in prop::collection::vec(message_strategy(), 1..16)) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("heartbeat.log");
        let log = HeartbeatLog::new(path.clone(), "0.0.0.2");

        for message in &messages {
            log.append(message).unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        prop_assert_eq!(lines.len(), messages.len());

        for (line, message) in lines.iter().zip(&messages) {
            let parsed = HeartbeatRecord::parse(line).expect("line should parse");
            prop_assert_eq!(&parsed.message, message);
            prop_assert_eq!(parsed.version.as_str(), "0.0.0.2");
        }
    }
}
