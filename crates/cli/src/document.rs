// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-file stripping: read, normalize, strip, write back.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::file_reader::FileContent;
use crate::strip::{self, PatternCatalog};

/// Errors for a single document. The file is left untouched.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8", .path.display())]
    NotUtf8 { path: PathBuf },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What happened to one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    pub path: PathBuf,
    /// Groups removed.
    pub removed: usize,
    /// Occurrences left in place because their group never closes.
    pub malformed: usize,
    pub bytes_before: usize,
    pub bytes_after: usize,
    /// Whether the cleaned text differs from the file's content. Set even
    /// for dry runs.
    pub modified: bool,
    /// Whether the file was rewritten.
    pub written: bool,
}

impl DocumentReport {
    /// Whether any group was removed.
    pub fn changed(&self) -> bool {
        self.removed > 0
    }
}

/// Options for [`process_document`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessOptions {
    /// Compute the result without writing it.
    pub dry_run: bool,
}

/// Strip one file in place.
///
/// The text is newline-normalized before stripping, so the rewritten file
/// has spaces where it had line breaks. A file whose cleaned text is
/// identical to what was read is not rewritten.
pub fn process_document(
    path: &Path,
    catalog: &PatternCatalog,
    options: ProcessOptions,
) -> Result<DocumentReport, DocumentError> {
    // The source mapping is released inside `clean`, before writing.
    let (report, cleaned) = clean(path, catalog)?;

    let Some(cleaned) = cleaned else {
        return Ok(report);
    };
    if options.dry_run {
        return Ok(report);
    }

    std::fs::write(path, cleaned).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), removed = report.removed, "rewrote document");

    Ok(DocumentReport {
        written: true,
        ..report
    })
}

/// Read and strip `path`, returning the new text only when it differs.
fn clean(
    path: &Path,
    catalog: &PatternCatalog,
) -> Result<(DocumentReport, Option<String>), DocumentError> {
    let content = FileContent::read(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = content.as_str().ok_or_else(|| DocumentError::NotUtf8 {
        path: path.to_path_buf(),
    })?;

    let normalized = strip::normalize_newlines(raw);
    let outcome = strip::strip(&normalized, catalog);
    for group in &outcome.malformed {
        tracing::warn!(
            path = %path.display(),
            pattern = %group.pattern,
            offset = group.offset,
            "unterminated group left in place"
        );
    }

    let report = DocumentReport {
        path: path.to_path_buf(),
        removed: outcome.removed,
        malformed: outcome.malformed.len(),
        bytes_before: raw.len(),
        bytes_after: outcome.text.len(),
        modified: outcome.text != raw,
        written: false,
    };
    let cleaned = report.modified.then_some(outcome.text);
    Ok((report, cleaned))
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
