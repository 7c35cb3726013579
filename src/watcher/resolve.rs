//! Watch target resolution.
//!
//! Symlinks are followed before subscribing, and paths reported by the
//! primitive are mapped back onto the path the caller asked to watch.

use std::env;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::WatchError;

/// Whether a target is watched as a single file or a directory tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// A single file; watched non-recursively.
    File,
    /// A directory; watched recursively.
    Directory,
}

/// A resolved watch target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTarget {
    path: PathBuf,
    // Absolute form of `path`, for pattern matching.
    root: PathBuf,
    resolved: PathBuf,
    kind: TargetKind,
}

impl WatchTarget {
    /// The path as supplied by the caller.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The path actually subscribed to.
    #[must_use]
    pub fn resolved(&self) -> &Path {
        &self.resolved
    }

    /// File or directory.
    #[must_use]
    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    /// Map a path reported under [`resolved`](Self::resolved) back onto the
    /// caller-supplied path. Paths outside the resolved root pass through.
    #[must_use]
    pub fn rewrite(&self, event_path: &Path) -> PathBuf {
        if self.resolved == self.path {
            return event_path.to_path_buf();
        }

        match event_path.strip_prefix(&self.resolved) {
            Ok(rest) if rest.as_os_str().is_empty() => self.path.clone(),
            Ok(rest) => self.path.join(rest),
            Err(_) => event_path.to_path_buf(),
        }
    }

    /// Absolute form of a path returned by [`rewrite`](Self::rewrite).
    ///
    /// Relative supplied paths are anchored at the working directory seen
    /// when the target was resolved.
    #[must_use]
    pub fn absolute(&self, rewritten: &Path) -> PathBuf {
        if rewritten.is_absolute() {
            return rewritten.to_path_buf();
        }

        match rewritten.strip_prefix(&self.path) {
            Ok(rest) if rest.as_os_str().is_empty() => self.root.clone(),
            Ok(rest) => self.root.join(rest),
            Err(_) => absolute_path(rewritten),
        }
    }
}

/// Result of resolving a target that can be watched.
#[derive(Debug)]
pub struct Resolution {
    /// The target to subscribe to.
    pub target: WatchTarget,
    /// Non-fatal problem encountered on the way; worth logging.
    pub warning: Option<WatchError>,
}

/// Resolve `path` into a watch target.
///
/// A symlink is followed to its destination. A dangling symlink yields
/// [`WatchError::SymlinkDangling`]; any other failure to resolve a symlink is
/// returned as a warning and the original path is used instead.
///
/// # Errors
///
/// Returns [`WatchError::NotFound`] when nothing exists at the path,
/// [`WatchError::SymlinkDangling`] for a dangling link, and
/// [`WatchError::Subscription`] when the target cannot be inspected.
pub fn resolve_target(path: &Path) -> Result<Resolution, WatchError> {
    let link_meta = fs::symlink_metadata(path).map_err(|e| stat_error(path, &e))?;

    let mut warning = None;
    let (resolved, kind) = if link_meta.file_type().is_symlink() {
        match fs::canonicalize(path) {
            Ok(real) => {
                let kind = stat_kind(&real).map_err(|e| stat_error(path, &e))?;
                (real, kind)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(WatchError::SymlinkDangling {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => {
                // The link itself cannot be followed either; watch it as a file.
                warning = Some(WatchError::SymlinkResolution {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
                (path.to_path_buf(), TargetKind::File)
            }
        }
    } else {
        // Intermediate links (e.g. /var -> /private/var) are resolved too, so
        // backends that report canonical paths still rewrite cleanly.
        let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let kind = stat_kind(&resolved).map_err(|e| stat_error(path, &e))?;
        (resolved, kind)
    };

    Ok(Resolution {
        target: WatchTarget {
            path: path.to_path_buf(),
            root: absolute_path(path),
            resolved,
            kind,
        },
        warning,
    })
}

fn stat_kind(path: &Path) -> io::Result<TargetKind> {
    let kind = if fs::metadata(path)?.is_dir() {
        TargetKind::Directory
    } else {
        TargetKind::File
    };
    Ok(kind)
}

fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let relative: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(relative))
}

fn stat_error(path: &Path, err: &io::Error) -> WatchError {
    if err.kind() == io::ErrorKind::NotFound {
        WatchError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        WatchError::subscription(path, err)
    }
}
