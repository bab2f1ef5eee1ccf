// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `rtfstrip run` command implementation: convert, then strip.

use rtfstrip::cli::{Cli, RunArgs};
use rtfstrip::error::ExitCode;
use rtfstrip::pipeline;
use rtfstrip::report::RunReport;
use rtfstrip::runner::RunnerConfig;
use rtfstrip::verbose::VerboseLogger;

use crate::render;

/// Run the `rtfstrip run` command.
///
/// Documents that fail to convert are reported; the strip stage still runs
/// over whatever RTF files exist afterwards.
pub fn run(cli: &Cli, args: &RunArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let verbose = VerboseLogger::new(cli.verbose);

    let loaded = pipeline::load_config(cli.config.as_deref(), &cwd)?;
    render::config_section(&verbose, &loaded);

    let roots = pipeline::resolve_roots(&args.paths, &cwd);
    let max_depth = args.output.max_depth;

    let (converted, convert_stats) =
        pipeline::convert_stage(&roots, &loaded.config, args.tool.as_deref(), max_depth)?;
    render::discovery_section(&verbose, "convert", &roots, &convert_stats);

    let runner = RunnerConfig {
        jobs: args.jobs,
        dry_run: args.dry_run,
    };
    let (stripped, strip_stats) = pipeline::strip_stage(&roots, &loaded.catalog, max_depth, runner);
    render::discovery_section(&verbose, "strip", &roots, &strip_stats);

    let report = RunReport {
        convert: Some(converted),
        strip: Some(stripped),
        dry_run: args.dry_run,
    };
    render::write_report(&args.output, &report, &cwd)?;
    Ok(ExitCode::from_failures(report.failures()))
}
