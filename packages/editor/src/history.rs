//! # Undo/Redo History
//!
//! Linear, capped log of whole-document snapshots.
//!
//! ## Design
//!
//! - Each committed edit records a full snapshot with a label and timestamp
//! - A cursor marks the current entry; undo/redo only move the cursor
//! - Recording after an undo discards everything past the cursor
//! - When the cap is exceeded the oldest entries are dropped
//!
//! Each entry costs one document clone; no inverse operations are needed.
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new();
//! history.record("initialize", doc.clone());
//! history.record("add_section", next.clone());
//!
//! assert_eq!(history.undo(), Some(&doc));
//! assert_eq!(history.redo(), Some(&next));
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// One recorded document state
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry<D> {
    /// Monotonically increasing within one history
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    /// Label of the edit that produced this state
    pub action: String,
    pub snapshot: D,
}

/// Snapshot history with a cursor
#[derive(Debug, Clone)]
pub struct History<D> {
    entries: Vec<HistoryEntry<D>>,

    /// `None` iff `entries` is empty
    cursor: Option<usize>,

    /// Maximum number of entries kept (0 = unlimited)
    max_entries: usize,

    next_id: u64,
}

impl<D> History<D> {
    /// Create a history capped at [`DEFAULT_MAX_ENTRIES`]
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            max_entries,
            next_id: 1,
        }
    }

    /// Record a new current state, discarding any redo-able future.
    /// Returns the new cursor.
    pub fn record(&mut self, action: impl Into<String>, snapshot: D) -> usize {
        match self.cursor {
            Some(cursor) => self.entries.truncate(cursor + 1),
            None => self.entries.clear(),
        }

        self.entries.push(HistoryEntry {
            id: self.next_id,
            timestamp: Utc::now(),
            action: action.into(),
            snapshot,
        });
        self.next_id += 1;

        if self.max_entries > 0 && self.entries.len() > self.max_entries {
            let overflow = self.entries.len() - self.max_entries;
            self.entries.drain(..overflow);
        }

        let cursor = self.entries.len() - 1;
        self.cursor = Some(cursor);
        cursor
    }

    /// Step back one entry. `None` when already at the first entry.
    pub fn undo(&mut self) -> Option<&D> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                Some(&self.entries[cursor - 1].snapshot)
            }
            _ => None,
        }
    }

    /// Step forward one entry. `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<&D> {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.entries.len() => {
                self.cursor = Some(cursor + 1);
                Some(&self.entries[cursor + 1].snapshot)
            }
            _ => None,
        }
    }

    /// Snapshot at the cursor
    pub fn current(&self) -> Option<&D> {
        self.current_entry().map(|entry| &entry.snapshot)
    }

    /// Snapshot at the cursor, or `empty` when nothing was recorded
    pub fn current_or<'a>(&'a self, empty: &'a D) -> &'a D {
        self.current().unwrap_or(empty)
    }

    pub fn current_entry(&self) -> Option<&HistoryEntry<D>> {
        self.cursor.map(|cursor| &self.entries[cursor])
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor + 1 < self.entries.len())
    }

    /// Label of the edit an undo would revert
    pub fn undo_label(&self) -> Option<&str> {
        if self.can_undo() {
            self.current_entry().map(|entry| entry.action.as_str())
        } else {
            None
        }
    }

    /// Label of the edit a redo would reapply
    pub fn redo_label(&self) -> Option<&str> {
        let cursor = self.cursor?;
        self.entries.get(cursor + 1).map(|entry| entry.action.as_str())
    }

    pub fn entries(&self) -> &[HistoryEntry<D>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

impl<D> Default for History<D> {
    fn default() -> Self {
        Self::new()
    }
}
