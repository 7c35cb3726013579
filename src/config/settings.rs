//! Configuration settings and validation.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::{Error, Result};

/// Coalescing window assumed for the underlying watch primitive.
pub const PRIMITIVE_COALESCE_DELAY: Duration = Duration::from_millis(50);

/// Default debounce window: twice the primitive's own window, so one of its
/// batches is never split across two deliveries.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Upper bound on the debounce window.
pub const MAX_DEBOUNCE: Duration = Duration::from_secs(10);

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for one debounced watcher.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WatcherConfig {
    /// File or directory to watch.
    pub path: PathBuf,

    /// Glob patterns; matching events are dropped.
    pub excludes: Vec<String>,

    /// Glob patterns; when non-empty, only matching events are kept.
    pub includes: Vec<String>,

    /// Delay between the first buffered event and delivery.
    #[serde(with = "millis")]
    pub debounce: Duration,

    /// Emit trace-level log entries.
    pub verbose: bool,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            excludes: Vec::new(),
            includes: Vec::new(),
            debounce: DEFAULT_DEBOUNCE,
            verbose: false,
        }
    }
}

impl WatcherConfig {
    /// Create a configuration watching `path` with defaults.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Set exclude patterns.
    #[must_use]
    pub fn with_excludes<S: Into<String>>(mut self, excludes: impl IntoIterator<Item = S>) -> Self {
        self.excludes = excludes.into_iter().map(Into::into).collect();
        self
    }

    /// Set include patterns.
    #[must_use]
    pub fn with_includes<S: Into<String>>(mut self, includes: impl IntoIterator<Item = S>) -> Self {
        self.includes = includes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the debounce window.
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Set verbose logging.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::config("watch path cannot be empty"));
        }

        if self.debounce < PRIMITIVE_COALESCE_DELAY {
            return Err(Error::config(format!(
                "debounce must be at least {}ms",
                PRIMITIVE_COALESCE_DELAY.as_millis()
            )));
        }

        if self.debounce > MAX_DEBOUNCE {
            return Err(Error::config(format!(
                "debounce cannot exceed {}s",
                MAX_DEBOUNCE.as_secs()
            )));
        }

        if self
            .excludes
            .iter()
            .chain(&self.includes)
            .any(|p| p.trim().is_empty())
        {
            return Err(Error::config("patterns cannot be empty"));
        }

        Ok(())
    }
}

/// Settings for the `watchbatch` binary.
#[derive(Debug, Clone)]
pub struct Settings {
    /// The watcher itself.
    pub watcher: WatcherConfig,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON.
    pub log_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            watcher: WatcherConfig::default(),
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl Settings {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(Error::config(format!(
                "invalid log level '{}', must be one of: {}",
                self.log_level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        self.watcher.validate()
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
