// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `rtfstrip strip` command implementation.

use rtfstrip::cli::{Cli, StripArgs};
use rtfstrip::error::ExitCode;
use rtfstrip::pipeline;
use rtfstrip::report::RunReport;
use rtfstrip::runner::RunnerConfig;
use rtfstrip::verbose::VerboseLogger;

use crate::render;

/// Run the `rtfstrip strip` command.
pub fn run(cli: &Cli, args: &StripArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let verbose = VerboseLogger::new(cli.verbose);

    let loaded = pipeline::load_config(cli.config.as_deref(), &cwd)?;
    render::config_section(&verbose, &loaded);

    let roots = pipeline::resolve_roots(&args.paths, &cwd);
    let runner = RunnerConfig {
        jobs: args.jobs,
        dry_run: args.dry_run,
    };
    let (outcomes, stats) =
        pipeline::strip_stage(&roots, &loaded.catalog, args.output.max_depth, runner);
    render::discovery_section(&verbose, "strip", &roots, &stats);

    let report = RunReport {
        strip: Some(outcomes),
        dry_run: args.dry_run,
        ..RunReport::default()
    };
    render::write_report(&args.output, &report, &cwd)?;
    Ok(ExitCode::from_failures(report.failures()))
}
