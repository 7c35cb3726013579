//! Debounced watcher.
//!
//! Raw changes from a [`WatchPrimitive`] are rewritten to the watched path,
//! filtered, and buffered. The first buffered change arms a single-shot timer;
//! when it fires the buffer is swapped out, coalesced, and handed to the
//! change callback as one batch.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::{Mutex, ReentrantMutex};
use serde::Serialize;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use super::events::{coalesce, ChangeKind, FileChange};
use super::filter::PathFilter;
use super::primitive::{EventSink, PrimitiveEvent, Subscription, WatchPrimitive};
use super::resolve::{resolve_target, WatchTarget};
use super::stats::WatcherStats;
use crate::config::WatcherConfig;
use crate::error::WatchError;
use crate::{Error, Result};

/// Severity of a [`LogEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Diagnostic detail; only produced while verbose logging is on.
    Trace,
    /// Something went wrong; always produced.
    Error,
}

/// A message for the log callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    #[serde(rename = "type")]
    pub level: LogLevel,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            LogLevel::Trace => "trace",
            LogLevel::Error => "error",
        };
        write!(f, "[{level}] {}", self.message)
    }
}

/// Receives coalesced, non-empty batches.
pub type ChangeCallback = Arc<dyn Fn(Vec<FileChange>) + Send + Sync>;

/// Receives log entries.
pub type LogCallback = Arc<dyn Fn(LogEntry) + Send + Sync>;

#[derive(Default)]
struct Pending {
    changes: Vec<FileChange>,
    armed: bool,
}

struct Shared {
    path: PathBuf,
    filter: PathFilter,
    debounce: Duration,
    active: AtomicBool,
    verbose: AtomicBool,
    pending: Mutex<Pending>,
    // Held while a callback runs; dispose() takes it to wait out in-flight calls.
    gate: ReentrantMutex<()>,
    cancel: CancellationToken,
    runtime: Handle,
    on_change: ChangeCallback,
    on_log: LogCallback,
    stats: Arc<WatcherStats>,
}

impl Shared {
    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    fn is_verbose(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }

    fn trace(&self, message: impl FnOnce() -> String) {
        if self.is_verbose() {
            let message = message();
            tracing::trace!(path = %self.path.display(), "{message}");
            self.emit_log(LogEntry {
                level: LogLevel::Trace,
                message,
            });
        }
    }

    fn error(&self, message: String) {
        tracing::warn!(path = %self.path.display(), "{message}");
        self.stats.record_error();
        self.emit_log(LogEntry {
            level: LogLevel::Error,
            message,
        });
    }

    fn report(&self, err: &WatchError) {
        if err.is_benign() {
            self.trace(|| format!("not watching: {err}"));
        } else {
            self.error(err.to_string());
        }
    }

    fn emit_log(&self, entry: LogEntry) {
        let _gate = self.gate.lock();
        if self.is_active() {
            (self.on_log)(entry);
        }
    }

    fn handle(self: &Arc<Self>, event: PrimitiveEvent, target: &WatchTarget) {
        if !self.is_active() {
            return;
        }

        let changes = match event {
            PrimitiveEvent::Changes(changes) => changes,
            PrimitiveEvent::Error(message) => {
                self.error(format!("watcher error: {message}"));
                return;
            }
        };

        self.stats.record_received(changes.len());

        let mut accepted = Vec::with_capacity(changes.len());
        for change in changes {
            let change = FileChange::new(change.kind, target.rewrite(&change.path));

            if change.kind == ChangeKind::Deleted && change.path == target.path() {
                self.trace(|| format!("watched path {} was deleted", change.path.display()));
            }

            if self.filter.is_excluded(&target.absolute(&change.path)) {
                self.stats.record_excluded();
                self.trace(|| format!(" >> ignored (excluded) {change}"));
                continue;
            }

            self.trace(|| format!(" >> normalized {change}"));
            accepted.push(change);
        }

        if accepted.is_empty() {
            return;
        }

        let arm = {
            let mut pending = self.pending.lock();
            pending.changes.extend(accepted);
            !std::mem::replace(&mut pending.armed, true)
        };

        if arm {
            self.schedule_flush();
        }
    }

    fn schedule_flush(self: &Arc<Self>) {
        let weak: Weak<Self> = Arc::downgrade(self);
        let cancel = self.cancel.clone();
        let delay = self.debounce;

        self.runtime.spawn(async move {
            tokio::select! {
                () = cancel.cancelled() => {}
                () = tokio::time::sleep(delay) => {
                    if let Some(shared) = weak.upgrade() {
                        shared.flush();
                    }
                }
            }
        });
    }

    fn flush(&self) {
        let raw = {
            let mut pending = self.pending.lock();
            pending.armed = false;
            std::mem::take(&mut pending.changes)
        };

        if !self.is_active() {
            return;
        }

        let raw_count = raw.len();
        let batch = coalesce(raw);
        if batch.is_empty() {
            self.trace(|| format!("{raw_count} raw changes coalesced to nothing"));
            return;
        }

        tracing::debug!(
            path = %self.path.display(),
            raw = raw_count,
            delivered = batch.len(),
            "Delivering change batch"
        );

        let _gate = self.gate.lock();
        if self.is_active() {
            self.stats.record_batch(batch.len());
            (self.on_change)(batch);
        }
    }
}

/// Watches one path and delivers debounced, coalesced batches of changes.
///
/// Failures to watch never surface as errors: they are reported through the
/// log callback and the watcher stays inert. Dropping the watcher disposes it.
pub struct DebouncedWatcher {
    shared: Arc<Shared>,
    target: Option<WatchTarget>,
    subscription: Mutex<Option<Box<dyn Subscription>>>,
}

impl fmt::Debug for DebouncedWatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebouncedWatcher")
            .field("path", &self.shared.path)
            .field("target", &self.target)
            .field("active", &self.is_active())
            .field("watching", &self.is_watching())
            .finish_non_exhaustive()
    }
}

impl DebouncedWatcher {
    /// Start watching `config.path` right away.
    ///
    /// Symlinks are followed before subscribing; events are still reported
    /// under `config.path`. A missing path or dangling symlink leaves the
    /// watcher inert and is logged at trace level; any other failure is
    /// logged at error level. Invalid patterns are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Runtime`] when called outside a tokio runtime, which
    /// is needed to host the flush timer.
    pub fn start<C, L>(
        config: WatcherConfig,
        primitive: Arc<dyn WatchPrimitive>,
        on_change: C,
        on_log: L,
    ) -> Result<Self>
    where
        C: Fn(Vec<FileChange>) + Send + Sync + 'static,
        L: Fn(LogEntry) + Send + Sync + 'static,
    {
        let runtime = Handle::try_current().map_err(|e| Error::Runtime(e.to_string()))?;
        let (filter, pattern_errors) = PathFilter::new(&config.excludes, &config.includes);

        let shared = Arc::new(Shared {
            path: config.path.clone(),
            filter,
            debounce: config.debounce,
            active: AtomicBool::new(true),
            verbose: AtomicBool::new(config.verbose),
            pending: Mutex::new(Pending::default()),
            gate: ReentrantMutex::new(()),
            cancel: CancellationToken::new(),
            runtime,
            on_change: Arc::new(on_change),
            on_log: Arc::new(on_log),
            stats: WatcherStats::new(),
        });

        for err in pattern_errors {
            shared.error(err.to_string());
        }

        let (target, subscription) = match subscribe(&shared, primitive.as_ref()) {
            Some((target, subscription)) => (Some(target), Some(subscription)),
            None => (None, None),
        };

        Ok(Self {
            shared,
            target,
            subscription: Mutex::new(subscription),
        })
    }

    /// Toggle trace-level log entries for subsequent events.
    pub fn set_verbose_logging(&self, verbose: bool) {
        self.shared.verbose.store(verbose, Ordering::Relaxed);
    }

    /// Stop watching. Idempotent.
    ///
    /// Cancels a scheduled flush, drops the subscription and pending changes,
    /// and waits for a callback running on another thread to return. No
    /// callback fires after this returns. Safe to call from a callback.
    pub fn dispose(&self) {
        if !self.shared.active.swap(false, Ordering::SeqCst) {
            return;
        }

        self.shared.cancel.cancel();

        if let Some(subscription) = self.subscription.lock().take() {
            subscription.unsubscribe();
        }

        self.shared.pending.lock().changes.clear();

        drop(self.shared.gate.lock());
        tracing::debug!(path = %self.shared.path.display(), "Watcher disposed");
    }

    /// The path as supplied in the configuration.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.shared.path
    }

    /// The resolved target, if resolution succeeded.
    #[must_use]
    pub fn target(&self) -> Option<&WatchTarget> {
        self.target.as_ref()
    }

    /// Whether `dispose` has not been called yet.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.shared.is_active()
    }

    /// Whether a live subscription exists.
    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.is_active() && self.subscription.lock().is_some()
    }

    /// Counters for this watcher.
    #[must_use]
    pub fn stats(&self) -> Arc<WatcherStats> {
        Arc::clone(&self.shared.stats)
    }
}

impl Drop for DebouncedWatcher {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn subscribe(
    shared: &Arc<Shared>,
    primitive: &dyn WatchPrimitive,
) -> Option<(WatchTarget, Box<dyn Subscription>)> {
    let resolution = match resolve_target(&shared.path) {
        Ok(resolution) => resolution,
        Err(e) => {
            shared.report(&e);
            return None;
        }
    };

    if let Some(warning) = &resolution.warning {
        shared.report(warning);
    }

    let target = resolution.target;
    shared.trace(|| {
        format!(
            "request to start watching {} ({:?}, {} excludes, {} includes)",
            target.resolved().display(),
            target.kind(),
            shared.filter.exclude_count(),
            shared.filter.include_count()
        )
    });

    let sink: EventSink = {
        let weak = Arc::downgrade(shared);
        let target = target.clone();
        Arc::new(move |event: PrimitiveEvent| {
            if let Some(shared) = weak.upgrade() {
                shared.handle(event, &target);
            }
        })
    };

    match primitive.subscribe(target.resolved(), target.kind(), sink) {
        Ok(subscription) => {
            shared.trace(|| format!("started watching {}", target.resolved().display()));
            Some((target, subscription))
        }
        Err(e) => {
            shared.report(&e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::watcher::manual::ManualPrimitive;
    use crate::watcher::resolve::TargetKind;
    use tempfile::TempDir;

    type Batches = Arc<Mutex<Vec<Vec<FileChange>>>>;
    type Logs = Arc<Mutex<Vec<LogEntry>>>;

    fn start(
        config: WatcherConfig,
        primitive: &ManualPrimitive,
    ) -> (DebouncedWatcher, Batches, Logs) {
        let batches: Batches = Arc::default();
        let logs: Logs = Arc::default();
        let batches_clone = Arc::clone(&batches);
        let logs_clone = Arc::clone(&logs);

        let watcher = DebouncedWatcher::start(
            config,
            Arc::new(primitive.clone()),
            move |batch| batches_clone.lock().push(batch),
            move |entry| logs_clone.lock().push(entry),
        )
        .unwrap();

        (watcher, batches, logs)
    }

    fn errors(logs: &Logs) -> Vec<LogEntry> {
        logs.lock()
            .iter()
            .filter(|e| e.level == LogLevel::Error)
            .cloned()
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_excluded_and_duplicate_events() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        let primitive = ManualPrimitive::new();
        let (watcher, batches, _logs) =
            start(WatcherConfig::new(root).with_excludes(["**/*.log"]), &primitive);

        primitive.emit(vec![
            FileChange::updated(root.join("a.txt")),
            FileChange::updated(root.join("a.txt")),
            FileChange::added(root.join("b.log")),
        ]);

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(
            *batches.lock(),
            vec![vec![FileChange::updated(root.join("a.txt"))]]
        );

        let stats = watcher.stats().snapshot();
        assert_eq!(stats.events_received, 3);
        assert_eq!(stats.events_excluded, 1);
        assert_eq!(stats.batches_delivered, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_excluded_events_do_not_arm_timer() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        let primitive = ManualPrimitive::new();
        let (_watcher, batches, _logs) =
            start(WatcherConfig::new(root).with_excludes(["**/*.log"]), &primitive);

        primitive.emit(vec![FileChange::added(root.join("b.log"))]);
        tokio::time::sleep(Duration::from_millis(60)).await;
        primitive.emit(vec![FileChange::added(root.join("c.txt"))]);

        // An armed timer from the excluded event would have fired at 100ms.
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(batches.lock().is_empty());

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(
            *batches.lock(),
            vec![vec![FileChange::added(root.join("c.txt"))]]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_add_then_delete_delivers_nothing() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        let primitive = ManualPrimitive::new();
        let (_watcher, batches, _logs) = start(WatcherConfig::new(root), &primitive);

        primitive.emit(vec![FileChange::added(root.join("tmp"))]);
        primitive.emit(vec![FileChange::deleted(root.join("tmp"))]);
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(batches.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_windows_deliver_separately() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        let primitive = ManualPrimitive::new();
        let (_watcher, batches, _logs) = start(WatcherConfig::new(root), &primitive);

        primitive.emit(vec![FileChange::added(root.join("a"))]);
        tokio::time::sleep(Duration::from_millis(150)).await;
        primitive.emit(vec![FileChange::updated(root.join("a"))]);
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(
            *batches.lock(),
            vec![
                vec![FileChange::added(root.join("a"))],
                vec![FileChange::updated(root.join("a"))],
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_cancels_scheduled_flush() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        let primitive = ManualPrimitive::new();
        let (watcher, batches, logs) =
            start(WatcherConfig::new(root).with_verbose(true), &primitive);

        primitive.emit(vec![FileChange::added(root.join("a"))]);
        watcher.dispose();
        let logged = logs.lock().len();

        assert!(!watcher.is_active());
        assert!(!watcher.is_watching());
        assert_eq!(primitive.active_subscriptions(), 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(batches.lock().is_empty());
        assert_eq!(logs.lock().len(), logged);

        // Idempotent.
        watcher.dispose();
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_from_change_callback() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        let primitive = ManualPrimitive::new();
        let slot: Arc<Mutex<Option<Arc<DebouncedWatcher>>>> = Arc::default();
        let slot_clone = Arc::clone(&slot);
        let calls = Arc::new(Mutex::new(0usize));
        let calls_clone = Arc::clone(&calls);

        let watcher = Arc::new(
            DebouncedWatcher::start(
                WatcherConfig::new(root),
                Arc::new(primitive.clone()),
                move |_batch| {
                    *calls_clone.lock() += 1;
                    if let Some(watcher) = slot_clone.lock().as_ref() {
                        watcher.dispose();
                    }
                },
                |_entry| {},
            )
            .unwrap(),
        );
        *slot.lock() = Some(Arc::clone(&watcher));

        primitive.emit(vec![FileChange::added(root.join("a"))]);
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(!watcher.is_active());

        primitive.emit(vec![FileChange::added(root.join("b"))]);
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(*calls.lock(), 1);

        slot.lock().take();
    }

    #[tokio::test(start_paused = true)]
    async fn test_verbose_toggle_only_affects_trace() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        let primitive = ManualPrimitive::new();
        let (watcher, batches, logs) = start(WatcherConfig::new(root), &primitive);

        primitive.emit(vec![FileChange::updated(root.join("a"))]);
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(logs.lock().is_empty());

        watcher.set_verbose_logging(true);
        primitive.emit(vec![FileChange::updated(root.join("a"))]);
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(logs
            .lock()
            .iter()
            .any(|e| e.level == LogLevel::Trace && e.message.contains("normalized")));

        watcher.set_verbose_logging(false);
        let logged = logs.lock().len();
        primitive.emit(vec![FileChange::updated(root.join("a"))]);
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(logs.lock().len(), logged);

        assert_eq!(batches.lock().len(), 3);
        assert!(batches
            .lock()
            .iter()
            .all(|b| b == &vec![FileChange::updated(root.join("a"))]));
    }

    #[tokio::test]
    async fn test_missing_path_is_inert_and_quiet() {
        let tmp = TempDir::new().unwrap();
        let primitive = ManualPrimitive::new();
        let (watcher, _batches, logs) = start(
            WatcherConfig::new(tmp.path().join("missing")).with_verbose(true),
            &primitive,
        );

        assert!(watcher.is_active());
        assert!(!watcher.is_watching());
        assert!(watcher.target().is_none());
        assert_eq!(primitive.active_subscriptions(), 0);
        assert!(errors(&logs).is_empty());
        assert!(logs.lock().iter().any(|e| e.message.contains("does not exist")));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_dangling_symlink_is_inert() {
        let tmp = TempDir::new().unwrap();
        let link = tmp.path().join("dangling");
        std::os::unix::fs::symlink(tmp.path().join("nowhere"), &link).unwrap();

        let primitive = ManualPrimitive::new();
        let (watcher, _batches, logs) = start(WatcherConfig::new(&link), &primitive);

        assert!(!watcher.is_watching());
        assert_eq!(primitive.active_subscriptions(), 0);
        assert!(errors(&logs).is_empty());
    }

    #[cfg(unix)]
    #[tokio::test(start_paused = true)]
    async fn test_symlink_events_use_supplied_path() {
        let tmp = TempDir::new().unwrap();
        let real = tmp.path().join("real");
        let link = tmp.path().join("link");
        std::fs::create_dir(&real).unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let primitive = ManualPrimitive::new();
        let (watcher, batches, _logs) = start(WatcherConfig::new(&link), &primitive);

        let resolved = watcher.target().unwrap().resolved().to_path_buf();
        assert_eq!(primitive.subscribed()[0].0, resolved);

        primitive.emit(vec![FileChange::added(resolved.join("a.txt"))]);
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(
            *batches.lock(),
            vec![vec![FileChange::added(link.join("a.txt"))]]
        );
    }

    #[tokio::test]
    async fn test_subscription_failure_is_logged() {
        let tmp = TempDir::new().unwrap();
        let primitive = ManualPrimitive::new();
        primitive.fail_next_subscribe("too many watches");

        let (watcher, _batches, logs) = start(WatcherConfig::new(tmp.path()), &primitive);

        assert!(!watcher.is_watching());
        let errors = errors(&logs);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("too many watches"));
        assert_eq!(watcher.stats().snapshot().errors, 1);
    }

    #[tokio::test]
    async fn test_runtime_error_is_logged() {
        let tmp = TempDir::new().unwrap();
        let primitive = ManualPrimitive::new();
        let (_watcher, batches, logs) = start(WatcherConfig::new(tmp.path()), &primitive);

        primitive.emit_error("queue overflow");

        let errors = errors(&logs);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "watcher error: queue overflow");
        assert!(batches.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_pattern_logged_and_skipped() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        let primitive = ManualPrimitive::new();
        let (watcher, batches, logs) = start(
            WatcherConfig::new(root).with_excludes(["a[", "**/*.log"]),
            &primitive,
        );

        assert!(watcher.is_watching());
        assert_eq!(errors(&logs).len(), 1);

        primitive.emit(vec![
            FileChange::added(root.join("x.log")),
            FileChange::added(root.join("x.txt")),
        ]);
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(
            *batches.lock(),
            vec![vec![FileChange::added(root.join("x.txt"))]]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_relative_root_matches_absolute_excludes() {
        let tmp = TempDir::new_in(".").unwrap();
        let root = tmp.path();
        assert!(root.is_relative());
        let exclude = std::env::current_dir()
            .unwrap()
            .join(root.file_name().unwrap())
            .join("build/**");

        let primitive = ManualPrimitive::new();
        let (watcher, batches, _logs) = start(
            WatcherConfig::new(root).with_excludes([exclude.to_string_lossy()]),
            &primitive,
        );

        let resolved = watcher.target().unwrap().resolved().to_path_buf();
        primitive.emit(vec![
            FileChange::added(resolved.join("build/out.o")),
            FileChange::added(resolved.join("main.c")),
        ]);
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(
            *batches.lock(),
            vec![vec![FileChange::added(root.join("main.c"))]]
        );
        assert_eq!(watcher.stats().snapshot().events_excluded, 1);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_unresolvable_symlink_is_logged_and_watched() {
        let tmp = TempDir::new().unwrap();
        let link = tmp.path().join("loop");
        std::os::unix::fs::symlink(&link, &link).unwrap();

        let primitive = ManualPrimitive::new();
        let (watcher, _batches, logs) = start(WatcherConfig::new(&link), &primitive);

        let errors = errors(&logs);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("failed to resolve symlink"));
        assert!(watcher.is_watching());
        assert_eq!(primitive.subscribed(), vec![(link, TargetKind::File)]);
    }

    #[test]
    fn test_start_outside_runtime_fails() {
        let result = DebouncedWatcher::start(
            WatcherConfig::new("/tmp"),
            Arc::new(ManualPrimitive::new()),
            |_| {},
            |_| {},
        );

        assert!(matches!(result, Err(Error::Runtime(_))));
    }

    #[test]
    fn test_log_entry_display() {
        let entry = LogEntry {
            level: LogLevel::Error,
            message: "boom".to_string(),
        };
        assert_eq!(entry.to_string(), "[error] boom");
    }
}
