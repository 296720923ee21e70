//! Bounded, newest-first log buffer.
//!
//! # Responsibilities
//! - Keep at most `capacity` entries, most recent first
//! - Evict from the tail when the cap is exceeded
//! - Hand out copies so callers serialize without holding the lock
//! - Report the entry count on every mutation (`proxy_log_entries`)
//!
//! # Design Decisions
//! - A single `Mutex` serializes append, clear and reads
//! - A poisoned lock is recovered: entries are plain data and every
//!   mutation completes before the guard is released

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::logs::entry::LogEntry;
use crate::observability::metrics;

/// Default cap on retained entries.
pub const MAX_LOG_ENTRIES: usize = 1000;

/// Process-wide store of proxy events, shared through `Arc`.
#[derive(Debug)]
pub struct LogStore {
    entries: Mutex<VecDeque<LogEntry>>,
    capacity: usize,
}

impl LogStore {
    /// Create an empty store holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Insert at the front, dropping the oldest entries beyond capacity.
    /// Returns the number of entries held afterwards.
    pub fn append(&self, entry: LogEntry) -> usize {
        let len = {
            let mut entries = self.lock();
            entries.push_front(entry);
            entries.truncate(self.capacity);
            entries.len()
        };
        metrics::record_log_size(len);
        len
    }

    /// Up to `limit` entries, most recent first.
    pub fn list(&self, limit: usize) -> Vec<LogEntry> {
        self.lock().iter().take(limit).cloned().collect()
    }

    /// Up to `limit` entries together with the total count, read atomically.
    pub fn snapshot(&self, limit: usize) -> (Vec<LogEntry>, usize) {
        let entries = self.lock();
        (entries.iter().take(limit).cloned().collect(), entries.len())
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.lock().clear();
        metrics::record_log_size(0);
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LogStore {
    fn default() -> Self {
        Self::new(MAX_LOG_ENTRIES)
    }
}
