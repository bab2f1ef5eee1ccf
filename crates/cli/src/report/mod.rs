// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run reports.
//!
//! Collects per-file outcomes of a convert and/or strip run and renders them
//! as text or JSON.

mod json;
mod text;

use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::convert::ConvertOutcome;
use crate::runner::FileOutcome;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Outcomes of one command invocation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert: Option<Vec<ConvertOutcome>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strip: Option<Vec<FileOutcome>>,

    pub dry_run: bool,
}

/// Totals over strip outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StripTotals {
    pub files: usize,
    pub stripped: usize,
    pub normalized: usize,
    pub unchanged: usize,
    pub failed: usize,
    pub groups_removed: usize,
    pub malformed_groups: usize,
}

/// Totals over convert outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConvertTotals {
    pub documents: usize,
    pub converted: usize,
    pub failed: usize,
}

impl RunReport {
    pub fn strip_totals(&self) -> Option<StripTotals> {
        let outcomes = self.strip.as_ref()?;
        let mut totals = StripTotals {
            files: outcomes.len(),
            ..StripTotals::default()
        };
        for outcome in outcomes {
            match outcome {
                FileOutcome::Stripped(_) => totals.stripped += 1,
                FileOutcome::Normalized(_) => totals.normalized += 1,
                FileOutcome::Unchanged(_) => totals.unchanged += 1,
                FileOutcome::Failed { .. } => totals.failed += 1,
            }
            if let Some(report) = outcome.report() {
                totals.groups_removed += report.removed;
                totals.malformed_groups += report.malformed;
            }
        }
        Some(totals)
    }

    pub fn convert_totals(&self) -> Option<ConvertTotals> {
        let outcomes = self.convert.as_ref()?;
        let failed = outcomes.iter().filter(|o| o.is_failure()).count();
        Some(ConvertTotals {
            documents: outcomes.len(),
            converted: outcomes.len() - failed,
            failed,
        })
    }

    /// Number of files that failed in any stage.
    pub fn failures(&self) -> usize {
        self.strip_totals().map_or(0, |t| t.failed) + self.convert_totals().map_or(0, |t| t.failed)
    }
}

/// Trait for rendering a run report.
pub trait ReportFormatter {
    fn format_to(&self, writer: &mut dyn WriteColor, report: &RunReport) -> anyhow::Result<()>;
}

/// Render `report` in the requested format.
pub fn format_report_to(
    writer: &mut dyn WriteColor,
    format: OutputFormat,
    report: &RunReport,
    base: &Path,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => TextFormatter::new(base).format_to(writer, report),
        OutputFormat::Json => JsonFormatter.format_to(writer, report),
    }
}

/// Display form of a file path.
///
/// Paths under `base` are shown relative to it; anything else is shortened
/// to its trailing half, e.g. `/srv/share/laudos/2024/a.rtf` becomes
/// `.../laudos/2024/a.rtf`.
pub fn display_path(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.display().to_string(),
        _ => shorten_path(path),
    }
}

/// Keep the trailing half of the path's components behind an ellipsis.
pub fn shorten_path(path: &Path) -> String {
    let components: Vec<Component<'_>> = path.components().collect();
    let middle = components.len() / 2;
    let tail: PathBuf = components[middle..].iter().collect();
    format!("...{}{}", std::path::MAIN_SEPARATOR, tail.display())
}

/// Helper to convert bytes to human-readable format.
pub fn human_bytes(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
