//! History: bounded undo/redo over full scene snapshots.
//!
//! Entries are deep clones of the whole element array, not diffs — scenes
//! are small and bounded, so the memory cost buys a much simpler model.
//! Pushing after an undo truncates the abandoned redo tail; pushing past
//! capacity evicts the oldest entry first.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::consts::HISTORY_CAPACITY;
use crate::element::FloorPlanElement;

/// Bounded undo/redo stack of scene snapshots.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Vec<FloorPlanElement>>,
    /// Index of the current entry, or `None` when the stack is empty.
    current: Option<usize>,
    capacity: usize,
}

impl History {
    /// History with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// History bounded to `capacity` entries. A capacity of zero is bumped
    /// to one so a push always has somewhere to land.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            current: None,
            capacity: capacity.max(1),
        }
    }

    /// Record a committed snapshot.
    ///
    /// Any redo entries beyond the current index are discarded, the snapshot
    /// is appended, and the oldest entry is evicted if the stack would
    /// exceed capacity.
    pub fn push(&mut self, snapshot: Vec<FloorPlanElement>) {
        if let Some(current) = self.current {
            self.entries.truncate(current + 1);
        } else {
            self.entries.clear();
        }

        self.entries.push(snapshot);
        if self.entries.len() > self.capacity {
            self.entries.remove(0);
        }
        self.current = Some(self.entries.len() - 1);
    }

    /// Step back one entry and return its snapshot. No-op at the bottom.
    pub fn undo(&mut self) -> Option<&[FloorPlanElement]> {
        let current = self.current?;
        if current == 0 {
            return None;
        }
        self.current = Some(current - 1);
        self.entries.get(current - 1).map(Vec::as_slice)
    }

    /// Step forward one entry and return its snapshot. No-op at the top.
    pub fn redo(&mut self) -> Option<&[FloorPlanElement]> {
        let current = self.current?;
        if current + 1 >= self.entries.len() {
            return None;
        }
        self.current = Some(current + 1);
        self.entries.get(current + 1).map(Vec::as_slice)
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.current.is_some_and(|c| c > 0)
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.current
            .is_some_and(|c| c + 1 < self.entries.len())
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The snapshot at the current index, if any.
    #[must_use]
    pub fn current(&self) -> Option<&[FloorPlanElement]> {
        self.entries.get(self.current?).map(Vec::as_slice)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
