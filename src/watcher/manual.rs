//! A watch primitive driven by hand.
//!
//! Useful for tests and for embedders that already receive change
//! notifications from elsewhere and only want the debouncing.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use super::events::FileChange;
use super::primitive::{EventSink, PrimitiveEvent, Subscription, WatchPrimitive};
use super::resolve::TargetKind;
use crate::error::WatchError;

#[derive(Default)]
struct ManualState {
    next_id: u64,
    subscriptions: Vec<ManualEntry>,
    fail_next: Option<String>,
}

struct ManualEntry {
    id: u64,
    path: PathBuf,
    kind: TargetKind,
    sink: EventSink,
}

/// Primitive whose events are injected with [`emit`](Self::emit).
#[derive(Clone, Default)]
pub struct ManualPrimitive {
    state: Arc<Mutex<ManualState>>,
}

impl std::fmt::Debug for ManualPrimitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualPrimitive")
            .field("active_subscriptions", &self.active_subscriptions())
            .finish()
    }
}

impl ManualPrimitive {
    /// Create a primitive with no subscriptions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `subscribe` call fail with `reason`.
    pub fn fail_next_subscribe(&self, reason: impl Into<String>) {
        self.state.lock().fail_next = Some(reason.into());
    }

    /// Deliver raw changes to every live subscription.
    ///
    /// Returns the number of sinks reached.
    pub fn emit(&self, changes: Vec<FileChange>) -> usize {
        self.broadcast(&PrimitiveEvent::Changes(changes))
    }

    /// Deliver a runtime error to every live subscription.
    pub fn emit_error(&self, message: impl Into<String>) -> usize {
        self.broadcast(&PrimitiveEvent::Error(message.into()))
    }

    /// Number of subscriptions not yet unsubscribed.
    #[must_use]
    pub fn active_subscriptions(&self) -> usize {
        self.state.lock().subscriptions.len()
    }

    /// Paths and kinds of the live subscriptions.
    #[must_use]
    pub fn subscribed(&self) -> Vec<(PathBuf, TargetKind)> {
        self.state
            .lock()
            .subscriptions
            .iter()
            .map(|entry| (entry.path.clone(), entry.kind))
            .collect()
    }

    fn broadcast(&self, event: &PrimitiveEvent) -> usize {
        // Sinks run outside the lock; they may re-enter the primitive.
        let sinks: Vec<EventSink> = self
            .state
            .lock()
            .subscriptions
            .iter()
            .map(|entry| Arc::clone(&entry.sink))
            .collect();

        for sink in &sinks {
            sink(event.clone());
        }
        sinks.len()
    }
}

impl WatchPrimitive for ManualPrimitive {
    fn subscribe(
        &self,
        path: &Path,
        kind: TargetKind,
        sink: EventSink,
    ) -> Result<Box<dyn Subscription>, WatchError> {
        let mut state = self.state.lock();

        if let Some(reason) = state.fail_next.take() {
            return Err(WatchError::subscription(path, reason));
        }

        let id = state.next_id;
        state.next_id += 1;
        state.subscriptions.push(ManualEntry {
            id,
            path: path.to_path_buf(),
            kind,
            sink,
        });

        Ok(Box::new(ManualSubscription {
            id,
            state: Arc::clone(&self.state),
        }))
    }
}

struct ManualSubscription {
    id: u64,
    state: Arc<Mutex<ManualState>>,
}

impl Subscription for ManualSubscription {
    fn unsubscribe(self: Box<Self>) {}
}

impl Drop for ManualSubscription {
    fn drop(&mut self) {
        self.state
            .lock()
            .subscriptions
            .retain(|entry| entry.id != self.id);
    }
}
