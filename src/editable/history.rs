//! Edit history (undo/redo) for the text editing engine.
//!
//! History is snapshot based: the engine pushes the full text and cursor
//! *before* every mutating command, so undo simply swaps the current state
//! with the most recent snapshot.

use std::collections::VecDeque;

/// Default number of undo snapshots kept before the oldest is evicted
pub const DEFAULT_UNDO_LIMIT: usize = 1000;

/// A saved buffer state that can be restored by undo/redo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub text: String,
    pub cursor: usize,
}

impl Snapshot {
    pub fn new(text: impl Into<String>, cursor: usize) -> Self {
        Self {
            text: text.into(),
            cursor,
        }
    }
}

/// Undo/redo stacks of text snapshots.
#[derive(Debug, Clone)]
pub struct UndoHistory {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: Vec<Snapshot>,
    limit: usize,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoHistory {
    /// Create a new history with the default limit
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_UNDO_LIMIT)
    }

    /// Create a new history keeping at most `limit` undo snapshots
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Record the pre-edit state (clears the redo stack)
    pub fn push(&mut self, text: &str, cursor: usize) {
        self.redo_stack.clear();
        self.undo_stack.push_back(Snapshot::new(text, cursor));

        while self.undo_stack.len() > self.limit {
            self.undo_stack.pop_front();
        }
    }

    /// Pop the most recent snapshot, saving `current` for redo
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let restored = self.undo_stack.pop_back()?;
        self.redo_stack.push(current);
        tracing::debug!(
            undo = self.undo_stack.len(),
            redo = self.redo_stack.len(),
            "undo"
        );
        Some(restored)
    }

    /// Pop the most recently undone snapshot, saving `current` for undo
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let restored = self.redo_stack.pop()?;
        self.undo_stack.push_back(current);
        tracing::debug!(
            undo = self.undo_stack.len(),
            redo = self.redo_stack.len(),
            "redo"
        );
        Some(restored)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
