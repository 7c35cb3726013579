//! Configuration management for watchbatch.
//!
//! Library users build a [`WatcherConfig`] directly. The binary fills
//! [`Settings`] from command-line arguments and `WATCHBATCH_*` environment
//! variables.

mod settings;

pub use settings::{
    Settings, WatcherConfig, DEFAULT_DEBOUNCE, MAX_DEBOUNCE, PRIMITIVE_COALESCE_DELAY,
};
