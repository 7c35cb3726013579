//! watchbatch - debounced file-change notifications
//!
//! Watches a file or directory and prints one batch of coalesced changes per
//! debounce window until interrupted.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use watchbatch::observability::{init_tracing, TracingConfig};
use watchbatch::{
    DebouncedWatcher, Error, FileChange, LogEntry, LogLevel, NotifyPrimitive, Result, Settings,
    WatcherConfig,
};

/// Output format for change batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `KIND path` line per change.
    Text,
    /// One JSON array per batch.
    Json,
}

/// watchbatch - debounced file-change notifications
#[derive(Parser, Debug)]
#[command(name = "watchbatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File or directory to watch
    #[arg(env = "WATCHBATCH_PATH")]
    path: PathBuf,

    /// Glob patterns to exclude (matched against absolute paths)
    #[arg(short, long, env = "WATCHBATCH_EXCLUDE", value_delimiter = ',')]
    exclude: Vec<String>,

    /// Glob patterns to include; when set, everything else is dropped
    #[arg(short, long, env = "WATCHBATCH_INCLUDE", value_delimiter = ',')]
    include: Vec<String>,

    /// Debounce window in milliseconds
    #[arg(short, long, env = "WATCHBATCH_DEBOUNCE_MS", default_value = "100")]
    debounce_ms: u64,

    /// Report every raw event and filtering decision
    #[arg(short, long, env = "WATCHBATCH_VERBOSE")]
    verbose: bool,

    /// Output format for change batches
    #[arg(short, long, env = "WATCHBATCH_FORMAT", value_enum, default_value = "text")]
    format: Format,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "WATCHBATCH_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable JSON logging output
    #[arg(long, env = "WATCHBATCH_LOG_JSON")]
    log_json: bool,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            watcher: WatcherConfig::new(&self.path)
                .with_excludes(self.exclude.clone())
                .with_includes(self.include.clone())
                .with_debounce(Duration::from_millis(self.debounce_ms))
                .with_verbose(self.verbose),
            log_level: self.log_level.clone(),
            log_json: self.log_json,
        }
    }
}

fn print_batch(format: Format, batch: &[FileChange]) {
    let mut out = std::io::stdout().lock();

    let result = match format {
        Format::Text => batch
            .iter()
            .try_for_each(|change| writeln!(out, "{} {}", change.kind, change.path.display())),
        Format::Json => match serde_json::to_string(batch) {
            Ok(line) => writeln!(out, "{line}"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize batch");
                Ok(())
            }
        },
    };

    if let Err(e) = result.and_then(|()| out.flush()) {
        tracing::warn!(error = %e, "Failed to write batch");
    }
}

fn forward_log(entry: &LogEntry) {
    match entry.level {
        LogLevel::Trace => tracing::info!(target: "watchbatch::watch", "{}", entry.message),
        LogLevel::Error => tracing::error!(target: "watchbatch::watch", "{}", entry.message),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings();

    init_tracing(&TracingConfig::from(&settings));

    tracing::info!("watchbatch v{} starting...", env!("CARGO_PKG_VERSION"));
    tracing::debug!(?settings, "Configuration loaded");

    settings.validate()?;

    let format = cli.format;
    let watcher = DebouncedWatcher::start(
        settings.watcher,
        Arc::new(NotifyPrimitive::new()),
        move |batch| print_batch(format, &batch),
        |entry| forward_log(&entry),
    )?;

    if !watcher.is_watching() {
        tracing::warn!(
            path = %watcher.path().display(),
            "Nothing to watch; waiting for interrupt"
        );
    }

    tokio::signal::ctrl_c().await.map_err(Error::Io)?;

    tracing::info!(stats = ?watcher.stats().snapshot(), "Shutting down");
    watcher.dispose();

    Ok(())
}
