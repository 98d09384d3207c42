// src/history.rs

use std::collections::VecDeque;

use tracing::debug;

use crate::exec::ExecutionResult;

/// A command result retained for the history pane.
pub type HistoryEntry = ExecutionResult;

/// Fixed-capacity FIFO of the most recent command results.
///
/// Entries stay in execution order; once full, every append evicts the
/// oldest entry.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

impl HistoryBuffer {
    /// `capacity` is clamped to at least 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity + 1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                debug!(command = %evicted.command, "evicted oldest history entry");
            }
        }
    }

    /// Current contents, oldest first.
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }
}
