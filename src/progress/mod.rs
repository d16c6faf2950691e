//! Practice-progress log.
//!
//! Persistence of practice history is explicitly out of scope, but the API
//! still exposes a progress endpoint so the frontend flow can be wired up.
//! [`ProgressLog`] backs it with a bounded in-memory window — entries live
//! for the process lifetime only and the oldest are dropped once the window
//! is full.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ProgressEntry
// ---------------------------------------------------------------------------

/// One recorded practice result, as posted by the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Practice mode, e.g. `"kana-quiz"` or `"shadowing"`.
    pub kind: String,
    /// What was practised — a kana, a romaji syllable or a sentence.
    pub label: String,
    /// Star rating achieved (0–5).
    pub stars: u8,
    /// Accuracy / normalised score in `[0, 1]`.
    pub accuracy: f64,
}

// ---------------------------------------------------------------------------
// ProgressLog
// ---------------------------------------------------------------------------

/// Entries kept before the oldest are dropped.
const MAX_ENTRIES: usize = 1_000;

/// Thread-safe, bounded, in-memory progress log.
///
/// # Example
/// ```rust
/// use kana_coach::progress::{ProgressEntry, ProgressLog};
///
/// let log = ProgressLog::new();
/// log.append(ProgressEntry {
///     kind: "kana-quiz".into(),
///     label: "か".into(),
///     stars: 5,
///     accuracy: 1.0,
/// });
/// assert_eq!(log.snapshot().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ProgressLog {
    entries: Mutex<VecDeque<ProgressEntry>>,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry, dropping the oldest once the window is full.
    pub fn append(&self, entry: ProgressEntry) {
        let mut entries = self.entries.lock().unwrap();
        entries.push_back(entry);
        while entries.len() > MAX_ENTRIES {
            entries.pop_front();
        }
    }

    /// Copy of all recorded entries, oldest first.
    pub fn snapshot(&self) -> Vec<ProgressEntry> {
        self.entries.lock().unwrap().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str) -> ProgressEntry {
        ProgressEntry {
            kind: "kana-quiz".into(),
            label: label.into(),
            stars: 4,
            accuracy: 0.75,
        }
    }

    #[test]
    fn starts_empty() {
        let log = ProgressLog::new();
        assert!(log.is_empty());
        assert!(log.snapshot().is_empty());
    }

    #[test]
    fn append_preserves_order() {
        let log = ProgressLog::new();
        log.append(entry("か"));
        log.append(entry("き"));
        let entries = log.snapshot();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "か");
        assert_eq!(entries[1].label, "き");
    }

    #[test]
    fn oldest_entries_are_dropped_past_the_cap() {
        let log = ProgressLog::new();
        for i in 0..(MAX_ENTRIES + 5) {
            log.append(entry(&format!("item-{i}")));
        }
        let entries = log.snapshot();
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries[0].label, "item-5");
    }

    #[test]
    fn entry_round_trips_through_json() {
        let original = entry("す");
        let json = serde_json::to_string(&original).unwrap();
        let back: ProgressEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(original, back);
    }
}
