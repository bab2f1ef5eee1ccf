// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report output and verbose sections shared by the commands.

use std::io::Write;
use std::path::{Path, PathBuf};

use termcolor::StandardStream;

use rtfstrip::cli::OutputArgs;
use rtfstrip::color;
use rtfstrip::pipeline::LoadedConfig;
use rtfstrip::report::{self, RunReport};
use rtfstrip::verbose::VerboseLogger;
use rtfstrip::walker::WalkStats;

/// Write the report to stdout.
pub fn write_report(output: &OutputArgs, run: &RunReport, base: &Path) -> anyhow::Result<()> {
    let choice = color::choose(output.color, output.no_color);
    let mut stdout = StandardStream::stdout(choice);
    report::format_report_to(&mut stdout, output.output, run, base)?;
    stdout.flush()?;
    Ok(())
}

pub fn config_section(verbose: &VerboseLogger, loaded: &LoadedConfig) {
    if !verbose.is_enabled() {
        return;
    }
    verbose.section("Configuration");
    match &loaded.path {
        Some(path) => verbose.field("Config", path.display()),
        None => verbose.log("Config: (defaults)"),
    }
    verbose.field("Tags", loaded.catalog.markers().join(" "));
    verbose.field("Extensions", loaded.config.extensions.ext.join(" "));
    if let Some(path) = &loaded.config.libreoffice.path {
        verbose.field("Converter", path.display());
    }
}

pub fn discovery_section(
    verbose: &VerboseLogger,
    stage: &str,
    roots: &[PathBuf],
    stats: &WalkStats,
) {
    if !verbose.is_enabled() {
        return;
    }
    verbose.section(&format!("Discovery ({})", stage));
    for root in roots {
        verbose.field("Root", root.display());
    }
    verbose.field("Files", stats.files_found);
    verbose.field("Skipped", stats.files_skipped);
    if stats.errors > 0 {
        verbose.field("Errors", stats.errors);
    }
}
