// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Document reading with size-based strategy.
//!
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We don't mutate the mapped memory
// 3. The mapping is copied into an owned buffer before the file is rewritten
#![allow(unsafe_code)]
//!
//! - < 64KB: direct read into buffer
//! - >= 64KB: memory-mapped I/O

use std::fs::{self, File};
use std::io;
use std::path::Path;

use memmap2::Mmap;

/// Files at or above this size are memory-mapped.
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Content of a file, either owned or memory-mapped.
pub enum FileContent {
    /// Small file read into memory.
    Owned(Vec<u8>),
    /// Large file memory-mapped.
    Mapped(Mmap),
}

impl FileContent {
    /// Read file using appropriate strategy based on size.
    pub fn read(path: &Path) -> io::Result<Self> {
        let size = fs::metadata(path)?.len();

        if size < MMAP_THRESHOLD {
            Ok(FileContent::Owned(fs::read(path)?))
        } else {
            let file = File::open(path)?;
            // SAFETY: File handle is valid (just opened), we don't mutate the mapped memory,
            // and callers copy the content out before writing to the same path.
            let mmap = unsafe { Mmap::map(&file)? };
            Ok(FileContent::Mapped(mmap))
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileContent::Owned(bytes) => bytes,
            FileContent::Mapped(mmap) => mmap,
        }
    }

    /// Get content as string slice.
    /// Returns None if content is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, FileContent::Mapped(_))
    }
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
