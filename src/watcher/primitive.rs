//! The OS-level watch primitive and its notify-backed implementation.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use notify::event::{ModifyKind, RenameMode};
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use super::events::FileChange;
use super::resolve::TargetKind;
use crate::error::WatchError;

/// Something the primitive reports to a subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveEvent {
    /// Raw, uncoalesced changes.
    Changes(Vec<FileChange>),
    /// A runtime failure of the underlying source.
    Error(String),
}

/// Receives events from a subscription. May be called from any thread.
pub type EventSink = Arc<dyn Fn(PrimitiveEvent) + Send + Sync>;

/// A live subscription. Dropping it without calling
/// [`unsubscribe`](Subscription::unsubscribe) must also stop delivery.
pub trait Subscription: Send {
    /// Stop delivering events to the sink.
    fn unsubscribe(self: Box<Self>);
}

/// Capability to observe a path for changes.
pub trait WatchPrimitive: Send + Sync {
    /// Start delivering changes under `path` to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::NotFound`] if the path vanished, or
    /// [`WatchError::Subscription`] for any other refusal.
    fn subscribe(
        &self,
        path: &Path,
        kind: TargetKind,
        sink: EventSink,
    ) -> Result<Box<dyn Subscription>, WatchError>;
}

/// Watch primitive backed by the platform's recommended `notify` watcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct NotifyPrimitive;

impl NotifyPrimitive {
    /// Create a new primitive.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

struct NotifySubscription {
    watcher: RecommendedWatcher,
    path: PathBuf,
}

impl fmt::Debug for NotifySubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotifySubscription")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl Subscription for NotifySubscription {
    fn unsubscribe(mut self: Box<Self>) {
        if let Err(e) = self.watcher.unwatch(&self.path) {
            tracing::debug!(path = %self.path.display(), error = %e, "Unwatch failed");
        }
    }
}

impl WatchPrimitive for NotifyPrimitive {
    fn subscribe(
        &self,
        path: &Path,
        kind: TargetKind,
        sink: EventSink,
    ) -> Result<Box<dyn Subscription>, WatchError> {
        let mut watcher = notify::recommended_watcher(
            move |result: std::result::Result<notify::Event, notify::Error>| match result {
                Ok(event) => {
                    if event.need_rescan() {
                        sink(PrimitiveEvent::Error(
                            "event queue overflowed, some changes were lost".to_string(),
                        ));
                    }

                    let changes = classify(&event);
                    if !changes.is_empty() {
                        sink(PrimitiveEvent::Changes(changes));
                    }
                }
                Err(e) => sink(PrimitiveEvent::Error(e.to_string())),
            },
        )
        .map_err(|e| notify_error(path, e))?;

        let mode = match kind {
            TargetKind::File => RecursiveMode::NonRecursive,
            TargetKind::Directory => RecursiveMode::Recursive,
        };

        watcher.watch(path, mode).map_err(|e| notify_error(path, e))?;
        tracing::debug!(path = %path.display(), ?kind, "Subscribed");

        Ok(Box::new(NotifySubscription {
            watcher,
            path: path.to_path_buf(),
        }))
    }
}

/// Translate a notify event into raw changes.
#[must_use]
pub fn classify(event: &notify::Event) -> Vec<FileChange> {
    let all = |make: fn(PathBuf) -> FileChange| -> Vec<FileChange> {
        event.paths.iter().cloned().map(make).collect()
    };

    match &event.kind {
        EventKind::Create(_) => all(FileChange::added),
        EventKind::Remove(_) => all(FileChange::deleted),
        EventKind::Modify(ModifyKind::Name(mode)) => match mode {
            RenameMode::From => all(FileChange::deleted),
            RenameMode::To => all(FileChange::added),
            RenameMode::Both => {
                let mut changes = Vec::with_capacity(2);
                if let Some(from) = event.paths.first() {
                    changes.push(FileChange::deleted(from.clone()));
                }
                if let Some(to) = event.paths.get(1) {
                    changes.push(FileChange::added(to.clone()));
                }
                changes
            }
            RenameMode::Any | RenameMode::Other => event
                .paths
                .iter()
                .map(|p| {
                    if p.exists() {
                        FileChange::added(p.clone())
                    } else {
                        FileChange::deleted(p.clone())
                    }
                })
                .collect(),
        },
        EventKind::Modify(_) | EventKind::Any => all(FileChange::updated),
        EventKind::Access(_) | EventKind::Other => Vec::new(),
    }
}

fn notify_error(path: &Path, err: notify::Error) -> WatchError {
    let not_found = match &err.kind {
        notify::ErrorKind::PathNotFound => true,
        notify::ErrorKind::Io(io) => io.kind() == std::io::ErrorKind::NotFound,
        _ => false,
    };

    if not_found {
        WatchError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        WatchError::subscription(path, err)
    }
}
