//! watchbatch
//!
//! Debounced, coalescing file-change notifications. Watch one file or
//! directory, drop events matching exclude globs, and receive at most one
//! deduplicated batch of changes per debounce window.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod observability;
pub mod watcher;

pub use config::{Settings, WatcherConfig};
pub use error::{Error, Result, WatchError};
pub use watcher::{ChangeKind, DebouncedWatcher, FileChange, LogEntry, LogLevel, NotifyPrimitive};
