//! Append-only match log.
//!
//! The log is game data shown to players ("Side B takes 1 damage"), not
//! diagnostics; diagnostics go through `tracing`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::Side;

/// Who a log line is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogSource {
    System,
    Side(Side),
}

/// One log line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Position in the log, starting at 0.
    pub sequence: u64,
    pub text: String,
    pub source: LogSource,
}

/// Ordered, append-only sequence of log entries.
///
/// Backed by `im::Vector`, so snapshotting the log is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    entries: Vector<LogEntry>,
}

impl GameLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line and return its sequence number.
    pub fn push(&mut self, source: LogSource, text: impl Into<String>) -> u64 {
        let sequence = self.entries.len() as u64;
        self.entries.push_back(LogEntry {
            sequence,
            text: text.into(),
            source,
        });
        sequence
    }

    /// Append a system line.
    pub fn system(&mut self, text: impl Into<String>) -> u64 {
        self.push(LogSource::System, text)
    }

    /// Append a line attributed to a side.
    pub fn side(&mut self, side: Side, text: impl Into<String>) -> u64 {
        self.push(LogSource::Side(side), text)
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &Vector<LogEntry> {
        &self.entries
    }

    /// The most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if any entry contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| e.text.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_numbers() {
        let mut log = GameLog::new();

        assert_eq!(log.system("start"), 0);
        assert_eq!(log.side(Side::A, "plays"), 1);
        assert_eq!(log.len(), 2);

        let last = log.last().unwrap();
        assert_eq!(last.sequence, 1);
        assert_eq!(last.source, LogSource::Side(Side::A));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut log = GameLog::new();
        log.system("one");

        let snapshot = log.clone();
        log.system("two");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
        assert!(log.contains("two"));
        assert!(!snapshot.contains("two"));
    }
}
