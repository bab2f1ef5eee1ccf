// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel document runner with error recovery.
//!
//! Strips documents in parallel using rayon, isolating errors so one
//! failing document doesn't prevent the others from being processed.

use std::path::PathBuf;

use rayon::prelude::*;
use serde::Serialize;

use crate::document::{DocumentReport, ProcessOptions, process_document};
use crate::strip::PatternCatalog;
use crate::walker::WalkedFile;

/// Configuration for the runner.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunnerConfig {
    /// Worker threads (None = rayon default, one per CPU).
    pub jobs: Option<usize>,
    pub dry_run: bool,
}

/// Result for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// At least one group was removed.
    Stripped(DocumentReport),
    /// No group matched but line breaks were replaced.
    Normalized(DocumentReport),
    /// Nothing matched and the content is as it was.
    Unchanged(DocumentReport),
    /// The file could not be processed and was left as is.
    Failed { path: PathBuf, error: String },
}

impl FileOutcome {
    pub fn path(&self) -> &std::path::Path {
        match self {
            FileOutcome::Stripped(r) | FileOutcome::Normalized(r) | FileOutcome::Unchanged(r) => {
                &r.path
            }
            FileOutcome::Failed { path, .. } => path,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FileOutcome::Failed { .. })
    }

    pub fn report(&self) -> Option<&DocumentReport> {
        match self {
            FileOutcome::Stripped(r) | FileOutcome::Normalized(r) | FileOutcome::Unchanged(r) => {
                Some(r)
            }
            FileOutcome::Failed { .. } => None,
        }
    }
}

/// The strip runner processes documents in parallel.
pub struct StripRunner {
    config: RunnerConfig,
}

impl StripRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Strip every file, returning outcomes in input order.
    ///
    /// The catalog is shared read-only between workers. A panic while
    /// processing one file becomes that file's failure.
    pub fn run(&self, files: &[WalkedFile], catalog: &PatternCatalog) -> Vec<FileOutcome> {
        let work = || -> Vec<FileOutcome> {
            files
                .par_iter()
                .map(|file| self.run_one(file, catalog))
                .collect()
        };

        match self.config.jobs {
            Some(jobs) => match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
                Ok(pool) => pool.install(work),
                Err(err) => {
                    tracing::warn!("failed to build thread pool ({}), using default", err);
                    work()
                }
            },
            None => work(),
        }
    }

    fn run_one(&self, file: &WalkedFile, catalog: &PatternCatalog) -> FileOutcome {
        let options = ProcessOptions {
            dry_run: self.config.dry_run,
        };

        // Catch panics to ensure error isolation
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            process_document(&file.path, catalog, options)
        }));

        match result {
            Ok(Ok(report)) if report.changed() => FileOutcome::Stripped(report),
            Ok(Ok(report)) if report.modified => FileOutcome::Normalized(report),
            Ok(Ok(report)) => FileOutcome::Unchanged(report),
            Ok(Err(err)) => {
                tracing::warn!("{}", err);
                FileOutcome::Failed {
                    path: file.path.clone(),
                    error: err.to_string(),
                }
            }
            Err(_) => FileOutcome::Failed {
                path: file.path.clone(),
                error: "internal error: processing panicked".to_string(),
            },
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
