// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel document discovery.
//!
//! Walks directories with the `ignore` crate's parallel walker and streams
//! every file whose extension is on the allow-list through a channel.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::JoinHandle;

use crossbeam_channel::Receiver;
use ignore::{WalkBuilder, WalkState};

use crate::config::defaults;

/// Walker settings.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum directory depth (None = unlimited).
    pub max_depth: Option<usize>,

    /// Respect .gitignore and .ignore files. Off by default: converted RTF
    /// output is commonly gitignored and must still be found.
    pub git_ignore: bool,

    /// Skip hidden files and directories.
    pub hidden: bool,

    /// Allowed extensions, lowercase without dots (empty = any file).
    pub extensions: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(defaults::walk::MAX_DEPTH),
            git_ignore: false,
            hidden: true,
            extensions: Vec::new(),
        }
    }
}

impl WalkerConfig {
    /// Only walk files with the given extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }
}

/// A discovered file.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    pub path: PathBuf,
    pub size: u64,
    /// Depth relative to the walk root (the root itself is 0).
    pub depth: usize,
}

/// Counters collected during a walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    pub files_found: usize,
    /// Files rejected by extension or as editor lock files.
    pub files_skipped: usize,
    pub errors: usize,
}

/// File walker over one root.
pub struct FileWalker {
    config: WalkerConfig,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Start walking `root` in the background.
    ///
    /// Files arrive on the returned channel in no particular order; the
    /// handle yields the stats once the walk finishes.
    pub fn walk(&self, root: &Path) -> (Receiver<WalkedFile>, JoinHandle<WalkStats>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        let builder = self.builder(root);
        let extensions = self.config.extensions.clone();

        let handle = std::thread::spawn(move || {
            let found = AtomicUsize::new(0);
            let skipped = AtomicUsize::new(0);
            let errors = AtomicUsize::new(0);

            builder.build_parallel().run(|| {
                let tx = tx.clone();
                let extensions = &extensions;
                let (found, skipped, errors) = (&found, &skipped, &errors);
                Box::new(move |entry| {
                    let entry = match entry {
                        Ok(entry) => entry,
                        Err(err) => {
                            tracing::warn!("walk error: {}", err);
                            errors.fetch_add(1, Ordering::Relaxed);
                            return WalkState::Continue;
                        }
                    };
                    if !entry.file_type().is_some_and(|t| t.is_file()) {
                        return WalkState::Continue;
                    }
                    if !is_candidate(entry.path(), extensions) {
                        skipped.fetch_add(1, Ordering::Relaxed);
                        return WalkState::Continue;
                    }
                    let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
                    found.fetch_add(1, Ordering::Relaxed);
                    let file = WalkedFile {
                        path: entry.path().to_path_buf(),
                        size,
                        depth: entry.depth(),
                    };
                    if tx.send(file).is_err() {
                        return WalkState::Quit;
                    }
                    WalkState::Continue
                })
            });

            WalkStats {
                files_found: found.into_inner(),
                files_skipped: skipped.into_inner(),
                errors: errors.into_inner(),
            }
        });

        (rx, handle)
    }

    /// Walk `root` and collect the files, sorted by path.
    pub fn walk_collect(&self, root: &Path) -> (Vec<WalkedFile>, WalkStats) {
        let (rx, handle) = self.walk(root);
        let mut files: Vec<WalkedFile> = rx.iter().collect();
        files.sort_by(|a, b| a.path.cmp(&b.path));
        let stats = handle.join().unwrap_or_else(|_| WalkStats {
            files_found: files.len(),
            ..WalkStats::default()
        });
        (files, stats)
    }

    /// Walk several roots, returning one sorted, de-duplicated list.
    pub fn walk_all(&self, roots: &[PathBuf]) -> (Vec<WalkedFile>, WalkStats) {
        let mut files = Vec::new();
        let mut stats = WalkStats::default();
        for root in roots {
            let (found, root_stats) = self.walk_collect(root);
            files.extend(found);
            stats.files_found += root_stats.files_found;
            stats.files_skipped += root_stats.files_skipped;
            stats.errors += root_stats.errors;
        }
        files.sort_by(|a, b| a.path.cmp(&b.path));
        files.dedup_by(|a, b| a.path == b.path);
        (files, stats)
    }

    fn builder(&self, root: &Path) -> WalkBuilder {
        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .ignore(self.config.git_ignore)
            .git_global(false)
            .require_git(true)
            .max_depth(self.config.max_depth);
        builder
    }
}

/// Whether `path` passes the extension allow-list and is not a lock file.
///
/// Office suites leave `~$name.docx` / `~lock` files next to open documents.
pub fn is_candidate(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.starts_with('~') {
        return false;
    }
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
