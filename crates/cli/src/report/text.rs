// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io::Write;
use std::path::{Path, PathBuf};

use termcolor::{ColorSpec, WriteColor};

use crate::color::scheme;
use crate::convert::ConvertOutcome;
use crate::runner::FileOutcome;

use super::{ReportFormatter, RunReport, display_path, human_bytes};

/// Width of the status column.
const LABEL_WIDTH: usize = 11;

/// Text format report formatter.
pub struct TextFormatter {
    base: PathBuf,
}

impl TextFormatter {
    /// Paths under `base` are printed relative to it.
    pub fn new(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
        }
    }

    fn path(&self, path: &Path) -> String {
        display_path(path, &self.base)
    }

    fn write_convert(
        &self,
        w: &mut dyn WriteColor,
        outcomes: &[ConvertOutcome],
    ) -> anyhow::Result<()> {
        for outcome in outcomes {
            match outcome {
                ConvertOutcome::Converted { source, output } => {
                    label(w, &scheme::pass(), "converted")?;
                    colored(w, &scheme::path(), &self.path(source))?;
                    writeln!(w, " -> {}", self.path(output))?;
                }
                ConvertOutcome::Failed { source, error } => {
                    label(w, &scheme::fail(), "FAIL")?;
                    colored(w, &scheme::path(), &self.path(source))?;
                    writeln!(w)?;
                    writeln!(w, "  {}", error)?;
                }
            }
        }
        Ok(())
    }

    fn write_strip(
        &self,
        w: &mut dyn WriteColor,
        outcomes: &[FileOutcome],
        dry_run: bool,
    ) -> anyhow::Result<()> {
        for outcome in outcomes {
            match outcome {
                FileOutcome::Stripped(report) => {
                    let status = if dry_run { "would strip" } else { "stripped" };
                    label(w, &scheme::pass(), status)?;
                    colored(w, &scheme::path(), &self.path(&report.path))?;
                    write!(
                        w,
                        " ({}, {} -> {}",
                        plural(report.removed, "group removed", "groups removed"),
                        human_bytes(report.bytes_before),
                        human_bytes(report.bytes_after)
                    )?;
                    if report.malformed > 0 {
                        write!(w, "; ")?;
                        write_malformed(w, report.malformed)?;
                    }
                    writeln!(w, ")")?;
                }
                FileOutcome::Normalized(report) => {
                    label(w, &scheme::plain(), "normalized")?;
                    colored(w, &scheme::path(), &self.path(&report.path))?;
                    write!(w, " (line breaks only")?;
                    if report.malformed > 0 {
                        write!(w, "; ")?;
                        write_malformed(w, report.malformed)?;
                    }
                    writeln!(w, ")")?;
                }
                FileOutcome::Unchanged(report) => {
                    label(w, &scheme::plain(), "unchanged")?;
                    colored(w, &scheme::path(), &self.path(&report.path))?;
                    if report.malformed > 0 {
                        write!(w, " (")?;
                        write_malformed(w, report.malformed)?;
                        write!(w, ")")?;
                    }
                    writeln!(w)?;
                }
                FileOutcome::Failed { path, error } => {
                    label(w, &scheme::fail(), "FAIL")?;
                    colored(w, &scheme::path(), &self.path(path))?;
                    writeln!(w)?;
                    writeln!(w, "  {}", error)?;
                }
            }
        }
        Ok(())
    }
}

impl ReportFormatter for TextFormatter {
    fn format_to(&self, w: &mut dyn WriteColor, report: &RunReport) -> anyhow::Result<()> {
        if let Some(outcomes) = &report.convert {
            self.write_convert(w, outcomes)?;
        }
        if let Some(outcomes) = &report.strip {
            self.write_strip(w, outcomes, report.dry_run)?;
        }

        if report.convert.is_some() || report.strip.is_some() {
            writeln!(w)?;
        }
        if let Some(t) = report.convert_totals() {
            colored(w, &scheme::header(), "Convert:")?;
            writeln!(
                w,
                " {}, {} converted, {} failed",
                plural(t.documents, "document", "documents"),
                t.converted,
                t.failed
            )?;
        }
        if let Some(t) = report.strip_totals() {
            colored(w, &scheme::header(), "Strip:")?;
            write!(
                w,
                " {}, {} {}, {} normalized, {} unchanged, {} failed; {}",
                plural(t.files, "file", "files"),
                t.stripped,
                if report.dry_run { "would change" } else { "stripped" },
                t.normalized,
                t.unchanged,
                t.failed,
                plural(t.groups_removed, "group removed", "groups removed")
            )?;
            if t.malformed_groups > 0 {
                write!(
                    w,
                    ", {}",
                    plural(t.malformed_groups, "unterminated group left", "unterminated groups left")
                )?;
            }
            writeln!(w)?;
        }
        Ok(())
    }
}

/// Write a padded status label.
fn label(w: &mut dyn WriteColor, spec: &ColorSpec, text: &str) -> std::io::Result<()> {
    colored(w, spec, &format!("{:<width$}", text, width = LABEL_WIDTH))?;
    write!(w, " ")
}

fn write_malformed(w: &mut dyn WriteColor, count: usize) -> std::io::Result<()> {
    colored(
        w,
        &scheme::warn(),
        &plural(count, "unterminated group left", "unterminated groups left"),
    )
}

fn colored(w: &mut dyn WriteColor, spec: &ColorSpec, text: &str) -> std::io::Result<()> {
    w.set_color(spec)?;
    write!(w, "{}", text)?;
    w.reset()
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
