//! Error types and Result aliases for watchbatch.
//!
//! Two layers live here. [`Error`] is returned from the few fallible entry
//! points (configuration, CLI set-up, starting a watcher without a runtime).
//! [`WatchError`] describes what can go wrong while subscribing to a path; a
//! running watcher never returns it, it renders it into a log entry instead.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias using watchbatch's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for watchbatch operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Watching error.
    #[error("watch error: {0}")]
    Watch(#[from] WatchError),

    /// Glob pattern failed to compile.
    #[error("invalid pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    /// No async runtime available to host the flush timer.
    #[error("runtime error: {0}")]
    Runtime(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while setting up a watch on a target path.
#[derive(Error, Debug)]
pub enum WatchError {
    /// The target does not exist (yet). Benign.
    #[error("path '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    /// The target is a symlink whose destination is missing. Benign.
    #[error("symlink '{}' is dangling", path.display())]
    SymlinkDangling { path: PathBuf },

    /// The target is a symlink that could not be resolved.
    #[error("failed to resolve symlink '{}': {reason}", path.display())]
    SymlinkResolution { path: PathBuf, reason: String },

    /// The underlying watch primitive refused the subscription.
    #[error("failed to watch '{}': {reason}", path.display())]
    Subscription { path: PathBuf, reason: String },
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a pattern error.
    pub fn pattern(pattern: impl Into<String>, reason: impl ToString) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }
}

impl WatchError {
    /// Create a subscription error.
    pub fn subscription(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        Self::Subscription {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error describes an expected situation rather than a fault.
    ///
    /// Benign errors are logged at trace level; the rest at error level.
    #[must_use]
    pub fn is_benign(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::SymlinkDangling { .. })
    }
}
