//! Counters for a running watcher.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Statistics for file watching.
#[derive(Debug, Default)]
pub struct WatcherStats {
    pub events_received: AtomicU64,
    pub events_excluded: AtomicU64,
    pub batches_delivered: AtomicU64,
    pub changes_delivered: AtomicU64,
    pub errors: AtomicU64,
}

impl WatcherStats {
    /// Create new stats tracker.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn record_received(&self, count: usize) {
        self.events_received
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub(crate) fn record_excluded(&self) {
        self.events_excluded.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_batch(&self, changes: usize) {
        self.batches_delivered.fetch_add(1, Ordering::Relaxed);
        self.changes_delivered
            .fetch_add(changes as u64, Ordering::Relaxed);
    }

    pub(crate) fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of current stats.
    #[must_use]
    pub fn snapshot(&self) -> WatcherStatsSnapshot {
        WatcherStatsSnapshot {
            events_received: self.events_received.load(Ordering::Relaxed),
            events_excluded: self.events_excluded.load(Ordering::Relaxed),
            batches_delivered: self.batches_delivered.load(Ordering::Relaxed),
            changes_delivered: self.changes_delivered.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of watcher stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatcherStatsSnapshot {
    pub events_received: u64,
    pub events_excluded: u64,
    pub batches_delivered: u64,
    pub changes_delivered: u64,
    pub errors: u64,
}
