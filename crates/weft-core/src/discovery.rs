//! Content file discovery
//!
//! Expands compiled content patterns into the deduplicated, ordered list
//! of files the class-name scanner will read. Traversal is read-only and
//! bounded by each pattern's literal prefix; file contents are never
//! touched here.

use crate::pattern::ContentPattern;
use crate::result::Result;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Resolves content patterns against one search root
#[derive(Debug, Clone)]
pub struct ContentResolver {
    root: PathBuf,
}

impl ContentResolver {
    /// Create a resolver rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The search root all patterns are relative to
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Expand patterns into a deduplicated, ordered file list.
    ///
    /// Results are unioned in first-seen pattern order; within one pattern
    /// the order follows a name-sorted directory walk, so re-resolving an
    /// unchanged tree yields an identical list. Duplicates across patterns
    /// are dropped by canonical absolute path. A pattern matching nothing
    /// is warned about, not an error.
    ///
    /// Per-pattern walks run on the rayon pool; the union below is
    /// sequential in pattern order so parallelism never changes output.
    pub fn resolve(&self, patterns: &[ContentPattern]) -> Result<Vec<PathBuf>> {
        let per_pattern: Vec<Vec<PathBuf>> = patterns
            .par_iter()
            .map(|pattern| self.resolve_pattern(pattern))
            .collect::<Result<Vec<_>>>()?;

        let mut seen = HashSet::new();
        let mut files = Vec::new();
        for (pattern, matches) in patterns.iter().zip(per_pattern) {
            if matches.is_empty() {
                warn!(pattern = %pattern, "content pattern matched no files");
            } else {
                debug!(pattern = %pattern, count = matches.len(), "pattern resolved");
            }
            for path in matches {
                let key = std::fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
                if seen.insert(key) {
                    files.push(path);
                }
            }
        }

        debug!(total = files.len(), "content resolution complete");
        Ok(files)
    }

    /// Walk the subtree bounded by one pattern's literal prefix
    fn resolve_pattern(&self, pattern: &ContentPattern) -> Result<Vec<PathBuf>> {
        let start = self.root.join(pattern.literal_prefix());
        if !start.exists() {
            return Ok(Vec::new());
        }

        // Fully literal patterns name at most one file
        if pattern.is_literal() {
            return Ok(if start.is_file() { vec![start] } else { Vec::new() });
        }

        let mut matches = Vec::new();
        for entry in WalkDir::new(&start)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            // Joined from the root, so stripping cannot fail
            let Ok(relative) = path.strip_prefix(&self.root) else {
                continue;
            };
            if pattern.matches(relative) {
                matches.push(path.to_path_buf());
            }
        }

        Ok(matches)
    }
}
