// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `rtfstrip convert` command implementation.

use rtfstrip::cli::{Cli, ConvertArgs};
use rtfstrip::error::ExitCode;
use rtfstrip::pipeline;
use rtfstrip::report::RunReport;
use rtfstrip::verbose::VerboseLogger;

use crate::render;

/// Run the `rtfstrip convert` command.
pub fn run(cli: &Cli, args: &ConvertArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let verbose = VerboseLogger::new(cli.verbose);

    let loaded = pipeline::load_config(cli.config.as_deref(), &cwd)?;
    render::config_section(&verbose, &loaded);

    let roots = pipeline::resolve_roots(&args.paths, &cwd);
    let (outcomes, stats) = pipeline::convert_stage(
        &roots,
        &loaded.config,
        args.tool.as_deref(),
        args.output.max_depth,
    )?;
    render::discovery_section(&verbose, "convert", &roots, &stats);

    let report = RunReport {
        convert: Some(outcomes),
        ..RunReport::default()
    };
    render::write_report(&args.output, &report, &cwd)?;
    Ok(ExitCode::from_failures(report.failures()))
}
