//! File change event types and coalescing.

use std::collections::HashMap;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Kind of change observed for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Path was created.
    Added,
    /// Path contents or metadata changed.
    Updated,
    /// Path was removed.
    Deleted,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Added => "ADDED",
            Self::Updated => "UPDATED",
            Self::Deleted => "DELETED",
        };
        f.write_str(label)
    }
}

/// A single change to a path, raw or coalesced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileChange {
    /// What happened.
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    /// Where it happened.
    pub path: PathBuf,
}

impl FileChange {
    /// Create a new change.
    pub fn new(kind: ChangeKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    /// Shorthand for an `Added` change.
    pub fn added(path: impl Into<PathBuf>) -> Self {
        Self::new(ChangeKind::Added, path)
    }

    /// Shorthand for an `Updated` change.
    pub fn updated(path: impl Into<PathBuf>) -> Self {
        Self::new(ChangeKind::Updated, path)
    }

    /// Shorthand for a `Deleted` change.
    pub fn deleted(path: impl Into<PathBuf>) -> Self {
        Self::new(ChangeKind::Deleted, path)
    }
}

impl fmt::Display for FileChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.path.display())
    }
}

/// Outcome of merging an incoming change into an existing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Merge {
    Keep(ChangeKind),
    Remove,
}

/// Merge table for two changes to the same path within one window.
fn merge(existing: ChangeKind, incoming: ChangeKind) -> Merge {
    use ChangeKind::{Added, Deleted, Updated};

    match (existing, incoming) {
        // Created and removed again: nothing happened.
        (Added, Deleted) => Merge::Remove,
        // Removed and recreated: the path still exists, with new contents.
        (Deleted, Added) => Merge::Keep(Updated),
        // Still new to the consumer.
        (Added, Updated) => Merge::Keep(Added),
        (_, incoming) => Merge::Keep(incoming),
    }
}

/// Collapses the raw changes of one debounce window into a minimal set.
///
/// At most one entry per path survives. Deletions come first, shortest path
/// first, and a deletion is dropped when one of its ancestors was deleted in
/// the same window. Additions and updates follow in first-seen order.
#[derive(Debug, Default)]
pub struct EventCoalescer {
    entries: Vec<Option<FileChange>>,
    index: HashMap<OsString, usize>,
}

impl EventCoalescer {
    /// Create a new empty coalescer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one change into the window.
    pub fn push(&mut self, change: FileChange) {
        let key = path_key(&change.path);

        if let Some(&slot) = self.index.get(&key) {
            if let Some(entry) = self.entries[slot].as_mut() {
                match merge(entry.kind, change.kind) {
                    Merge::Keep(kind) => entry.kind = kind,
                    Merge::Remove => {
                        self.entries[slot] = None;
                        self.index.remove(&key);
                    }
                }
                return;
            }
        }

        self.index.insert(key, self.entries.len());
        self.entries.push(Some(change));
    }

    /// Number of paths currently tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if no path is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Produce the coalesced batch.
    #[must_use]
    pub fn finish(self) -> Vec<FileChange> {
        let (mut deleted, others): (Vec<FileChange>, Vec<FileChange>) = self
            .entries
            .into_iter()
            .flatten()
            .partition(|change| change.kind == ChangeKind::Deleted);

        deleted.sort_by_key(|change| change.path.as_os_str().len());

        let mut kept: Vec<FileChange> = Vec::with_capacity(deleted.len() + others.len());
        for change in deleted {
            let covered = kept
                .iter()
                .any(|parent| is_strict_ancestor(&parent.path, &change.path));
            if !covered {
                kept.push(change);
            }
        }

        kept.extend(others);
        kept
    }
}

/// Coalesce one window's worth of raw changes.
#[must_use]
pub fn coalesce(changes: impl IntoIterator<Item = FileChange>) -> Vec<FileChange> {
    let mut coalescer = EventCoalescer::new();
    for change in changes {
        coalescer.push(change);
    }
    coalescer.finish()
}

/// Key used to identify "the same path" on this platform.
fn path_key(path: &Path) -> OsString {
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        // Non-UTF-8 paths keep their raw bytes.
        match path.to_str() {
            Some(s) => OsString::from(s.to_lowercase()),
            None => path.as_os_str().to_os_string(),
        }
    } else {
        path.as_os_str().to_os_string()
    }
}

fn is_strict_ancestor(parent: &Path, child: &Path) -> bool {
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        let parent = PathBuf::from(path_key(parent));
        let child = PathBuf::from(path_key(child));
        parent != child && child.starts_with(&parent)
    } else {
        parent != child && child.starts_with(parent)
    }
}
