// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rtfstrip::cli::{Cli, Command};
use rtfstrip::config::ConfigError;
use rtfstrip::convert::ConvertError;
use rtfstrip::error::ExitCode;

mod cmd_convert;
mod cmd_init;
mod cmd_run;
mod cmd_strip;
mod render;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "RTFSTRIP_LOG";

fn main() -> std::process::ExitCode {
    init_logging();
    let cli = Cli::parse();

    let code = match dispatch(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("rtfstrip: {}", err);
            classify(&err)
        }
    };
    code.into()
}

fn dispatch(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Command::Strip(args) => cmd_strip::run(cli, args),
        Command::Convert(args) => cmd_convert::run(cli, args),
        Command::Run(args) => cmd_run::run(cli, args),
        Command::Init(args) => cmd_init::run(args),
    }
}

/// Config problems and a missing converter are usage errors.
fn classify(err: &anyhow::Error) -> ExitCode {
    if err.downcast_ref::<ConfigError>().is_some() {
        return ExitCode::ConfigError;
    }
    if let Some(ConvertError::ToolNotFound { .. }) = err.downcast_ref::<ConvertError>() {
        return ExitCode::ConfigError;
    }
    ExitCode::InternalError
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
