// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// A small RTF document with a header, a color table and metadata.
pub const SAMPLE_RTF: &str = "{\\rtf1\\ansi\n{\\colortbl;\\red0\\green0\\blue0;}\n{\\info{\\title Laudo}{\\author x}}\n{\\headerr {\\pard Page\\par}}\n\\pard Body text\\par\n}\n";

/// `SAMPLE_RTF` after stripping with the default catalog.
pub const SAMPLE_RTF_STRIPPED: &str = "{\\rtf1\\ansi    \\pard Body text\\par } ";

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
///
/// # Example
///
/// ```ignore
/// let tmp = TempDir::new().unwrap();
/// create_tree(tmp.path(), &[
///     ("a/report.rtf", "{\\rtf1 x}"),
///     ("b/letter.docx", ""),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Creates a temp file with the given content for testing.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Creates a temp file with raw bytes.
pub fn temp_file_with_bytes(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}
