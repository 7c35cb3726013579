//! File system watching with debouncing and coalescing.
//!
//! This module provides:
//! - A [`WatchPrimitive`] seam with a notify-backed implementation
//! - Exclude/include glob filtering
//! - Symlink-aware target resolution
//! - The [`DebouncedWatcher`] that ties them together

mod debounce;
mod events;
mod filter;
mod manual;
mod primitive;
mod resolve;
mod stats;

pub use debounce::{ChangeCallback, DebouncedWatcher, LogCallback, LogEntry, LogLevel};
pub use events::{coalesce, ChangeKind, EventCoalescer, FileChange};
pub use filter::PathFilter;
pub use manual::ManualPrimitive;
pub use primitive::{
    classify, EventSink, NotifyPrimitive, PrimitiveEvent, Subscription, WatchPrimitive,
};
pub use resolve::{resolve_target, Resolution, TargetKind, WatchTarget};
pub use stats::{WatcherStats, WatcherStatsSnapshot};
