//! Linear state history with an undo/redo cursor.
//!
//! History always holds at least one entry. Entries after the cursor form the
//! redo tail; recording a new state drops that tail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A state the machine committed to, and when.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The state entered
    pub state: String,
    /// When the entry was recorded
    pub entered_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn new(state: String) -> Self {
        Self {
            state,
            entered_at: Utc::now(),
        }
    }
}

/// Ordered record of visited states plus the cursor into it.
///
/// Serializable for inspection only; a history is always created through
/// [`History::new`] so the cursor stays in range.
///
/// # Example
///
/// ```rust
/// use turnstile::core::History;
///
/// let mut history = History::new("idle");
/// history.record("busy");
/// history.record("done");
///
/// assert_eq!(history.current(), "done");
/// assert_eq!(history.back(), Some("busy"));
/// assert_eq!(history.forward(), Some("done"));
/// assert_eq!(history.forward(), None);
/// assert_eq!(history.path(), vec!["idle", "busy", "done"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl History {
    /// Start a history at `initial`, cursor 0.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![HistoryEntry::new(initial.into())],
            cursor: 0,
        }
    }

    /// Commit `state` after the cursor and move onto it.
    ///
    /// Any redo tail is discarded first.
    pub fn record(&mut self, state: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry::new(state.into()));
        self.cursor += 1;
    }

    /// Step the cursor back, returning the state now under it.
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Step the cursor forward, returning the state now under it.
    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    /// Collapse to a single entry holding the current state.
    ///
    /// The surviving entry keeps its original timestamp.
    pub fn clear(&mut self) {
        let current = self.entries.swap_remove(self.cursor);
        self.entries = vec![current];
        self.cursor = 0;
    }

    pub fn can_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// State under the cursor.
    pub fn current(&self) -> &str {
        &self.entries[self.cursor].state
    }

    /// State at index 0.
    pub fn initial(&self) -> &str {
        &self.entries[0].state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history holds at least its initial entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, including redo tail entries.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Every recorded state in order, redo tail included.
    pub fn path(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.state.as_str()).collect()
    }
}
