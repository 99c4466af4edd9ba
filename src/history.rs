//! View history for the task store.
//!
//! Every successful by-id fetch is reported here; removals evict their id.
//! The store consumes the tracker through the [`HistoryTracker`] trait so
//! tests can substitute their own recorder.

use std::collections::VecDeque;

use crate::model::{TaskEntry, TaskId};

pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Consumed contract of the history tracker.
///
/// Ordering and capacity are the implementation's own business; the store
/// only promises to `record` found entities and `evict` removed ids.
pub trait HistoryTracker: std::fmt::Debug {
    fn record(&mut self, entry: TaskEntry);
    fn evict(&mut self, id: TaskId);
    fn list(&self) -> Vec<TaskEntry>;
}

/// Bounded, order-preserving history of recently viewed entities.
///
/// Most recent last. Re-recording an id moves it to the most-recent slot;
/// once the capacity is reached the oldest entry is dropped.
#[derive(Debug, Clone)]
pub struct RecentHistory {
    entries: VecDeque<TaskEntry>,
    capacity: usize,
}

impl RecentHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RecentHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryTracker for RecentHistory {
    fn record(&mut self, entry: TaskEntry) {
        self.entries.retain(|existing| existing.id() != entry.id());
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    fn evict(&mut self, id: TaskId) {
        self.entries.retain(|entry| entry.id() != id);
    }

    fn list(&self) -> Vec<TaskEntry> {
        self.entries.iter().cloned().collect()
    }
}
