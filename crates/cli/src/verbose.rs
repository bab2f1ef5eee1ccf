// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose run diagnostics.
//!
//! With `--verbose`, the resolved configuration and walk statistics are
//! written to stderr as indented sections. Structured logs go through
//! `tracing` separately.

use std::io::Write;

/// Verbose output logger. Writes to stderr when enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a line under the current section.
    pub fn log(&self, msg: &str) {
        if self.enabled {
            let _ = write_line(&mut std::io::stderr(), msg);
        }
    }

    /// Print a `key: value` line under the current section.
    pub fn field(&self, key: &str, value: impl std::fmt::Display) {
        self.log(&format!("{}: {}", key, value));
    }

    /// Print a section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            let _ = write_section(&mut std::io::stderr(), title);
        }
    }
}

fn write_line(w: &mut impl Write, msg: &str) -> std::io::Result<()> {
    writeln!(w, "  {}", msg)
}

fn write_section(w: &mut impl Write, title: &str) -> std::io::Result<()> {
    writeln!(w, "\n{}:", title)
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
