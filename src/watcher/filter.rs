//! Path filtering with exclude and include globs.

use std::path::Path;

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

use crate::Error;

/// Compiled exclude/include patterns for one watcher.
///
/// Patterns are matched against the full absolute path of an event. `*` and
/// `?` never cross a path separator, so use a `**/` prefix to match at any
/// depth (`**/*.log`, `**/node_modules/**`).
#[derive(Debug, Clone)]
pub struct PathFilter {
    excludes: GlobSet,
    includes: Option<GlobSet>,
}

impl Default for PathFilter {
    fn default() -> Self {
        Self {
            excludes: GlobSet::empty(),
            includes: None,
        }
    }
}

impl PathFilter {
    /// Compile a filter from pattern lists.
    ///
    /// Invalid patterns are skipped and returned alongside the filter so the
    /// caller can report them; they never prevent construction.
    #[must_use]
    pub fn new<S: AsRef<str>>(excludes: &[S], includes: &[S]) -> (Self, Vec<Error>) {
        let mut errors = Vec::new();

        let excludes = compile(excludes, &mut errors);
        let includes = if includes.is_empty() {
            None
        } else {
            Some(compile(includes, &mut errors))
        };

        (Self { excludes, includes }, errors)
    }

    /// Create a filter from exclude patterns, failing on the first bad one.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is invalid.
    pub fn with_excludes<S: AsRef<str>>(excludes: &[S]) -> crate::Result<Self> {
        let (filter, mut errors) = Self::new(excludes, &[]);
        match errors.pop() {
            Some(err) => Err(err),
            None => Ok(filter),
        }
    }

    /// Check if an event for `path` must be dropped.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.excludes.is_match(path) {
            return true;
        }

        match &self.includes {
            Some(includes) => !includes.is_match(path),
            None => false,
        }
    }

    /// Number of compiled exclude patterns.
    #[must_use]
    pub fn exclude_count(&self) -> usize {
        self.excludes.len()
    }

    /// Number of compiled include patterns.
    #[must_use]
    pub fn include_count(&self) -> usize {
        self.includes.as_ref().map_or(0, GlobSet::len)
    }
}

fn compile<S: AsRef<str>>(patterns: &[S], errors: &mut Vec<Error>) -> GlobSet {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        match build_glob(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(e) => errors.push(Error::pattern(pattern, e)),
        }
    }

    builder.build().unwrap_or_else(|e| {
        errors.push(Error::pattern("<pattern set>", e));
        GlobSet::empty()
    })
}

fn build_glob(pattern: &str) -> std::result::Result<Glob, globset::Error> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .backslash_escape(!cfg!(windows))
        .build()
}
