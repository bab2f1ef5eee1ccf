// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `rtfstrip init` command implementation.

use rtfstrip::cli::InitArgs;
use rtfstrip::config::{Config, defaults};
use rtfstrip::error::ExitCode;

const HEADER: &str = "\
# rtfstrip configuration
#
# [rtf] tags are removed in order, each with its whole brace group.
";

/// Run the `rtfstrip init` command.
pub fn run(args: &InitArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(defaults::files::CONFIG_NAME);

    if config_path.exists() && !args.force {
        eprintln!(
            "{} already exists. Use --force to overwrite.",
            defaults::files::CONFIG_NAME
        );
        return Ok(ExitCode::ConfigError);
    }

    let body = Config::default().to_toml()?;
    std::fs::write(&config_path, format!("{}\n{}", HEADER, body))?;
    println!("Created {}", defaults::files::CONFIG_NAME);
    Ok(ExitCode::Success)
}
