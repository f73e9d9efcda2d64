//! The store port and the in-memory history adapter.

use serde::{Deserialize, Serialize};

use crate::query::{QueryString, QueryUpdate};

/// How a write commits to history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Append a new history entry (a new back-stack frame).
    Push,
    /// Replace the current entry; no new back-stack frame.
    #[default]
    Replace,
}

/// The injectable port the synchronizer reads and writes through.
///
/// The query string is process-wide UI state with this as its single writer
/// path; batching every change into one [`QueryUpdate`] avoids torn
/// multi-key updates.
pub trait QueryStore {
    /// The current query string.
    fn current(&self) -> &QueryString;

    /// Commit a batch of merge-writes as one atomic history operation.
    fn write(&mut self, update: QueryUpdate, mode: HistoryMode);
}

/// History stack adapter: what a browser address bar does, minus the browser.
///
/// Used directly by the CLI front end and by tests; back/forward navigation
/// makes reconciliation scenarios reproducible.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    frames: Vec<QueryString>,
    cursor: usize,
}

impl MemoryHistory {
    /// Start with a single empty frame.
    pub fn new() -> Self {
        Self {
            frames: vec![QueryString::new()],
            cursor: 0,
        }
    }

    /// Start with an initial query string, e.g. a pasted deep link.
    pub fn from_query(raw: &str) -> Self {
        Self {
            frames: vec![QueryString::parse(raw)],
            cursor: 0,
        }
    }

    /// Navigate one entry back. Returns false at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Navigate one entry forward. Returns false at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.frames.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Number of history entries.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryStore for MemoryHistory {
    fn current(&self) -> &QueryString {
        &self.frames[self.cursor]
    }

    fn write(&mut self, update: QueryUpdate, mode: HistoryMode) {
        let mut next = self.frames[self.cursor].clone();
        next.apply(&update);
        match mode {
            HistoryMode::Push => {
                // A push from the middle of the stack drops the forward entries.
                self.frames.truncate(self.cursor + 1);
                self.frames.push(next);
                self.cursor += 1;
            }
            HistoryMode::Replace => {
                self.frames[self.cursor] = next;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_keeps_depth() {
        let mut history = MemoryHistory::from_query("page=1");
        history.write(QueryUpdate::new().set("page", "2"), HistoryMode::Replace);
        assert_eq!(history.depth(), 1);
        assert_eq!(history.current().get("page"), Some("2"));
    }

    #[test]
    fn push_appends_and_back_restores() {
        let mut history = MemoryHistory::from_query("page=1");
        history.write(QueryUpdate::new().set("page", "2"), HistoryMode::Push);
        assert_eq!(history.depth(), 2);
        assert_eq!(history.current().get("page"), Some("2"));

        assert!(history.back());
        assert_eq!(history.current().get("page"), Some("1"));
        assert!(!history.back());

        assert!(history.forward());
        assert_eq!(history.current().get("page"), Some("2"));
        assert!(!history.forward());
    }

    #[test]
    fn push_from_middle_drops_forward_entries() {
        let mut history = MemoryHistory::new();
        history.write(QueryUpdate::new().set("page", "2"), HistoryMode::Push);
        history.write(QueryUpdate::new().set("page", "3"), HistoryMode::Push);
        history.back();
        history.write(QueryUpdate::new().set("sort", "charge.asc"), HistoryMode::Push);

        assert_eq!(history.depth(), 3);
        assert!(!history.forward());
        assert_eq!(history.current().get("page"), Some("2"));
        assert_eq!(history.current().get("sort"), Some("charge.asc"));
    }

    #[test]
    fn batched_write_is_atomic() {
        let mut history = MemoryHistory::from_query("charge=theft&page=5");
        history.write(
            QueryUpdate::new().clear("charge").set("page", "1"),
            HistoryMode::Push,
        );
        // One new frame for the whole batch, not one per key.
        assert_eq!(history.depth(), 2);
        history.back();
        assert_eq!(history.current().get("page"), Some("5"));
        assert_eq!(history.current().get("charge"), Some("theft"));
    }
}
