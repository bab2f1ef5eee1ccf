// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// `--color` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve the color choice from flags.
///
/// `--no-color` always wins over `--color=always`.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force_color {
        ColorChoice::Always
    } else {
        ColorChoice::Auto
    }
}

/// Resolve `--color`/`--no-color` against the environment.
pub fn choose(mode: ColorMode, no_color_flag: bool) -> ColorChoice {
    let env_no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    match resolve_color(mode == ColorMode::Always, no_color_flag || mode == ColorMode::Never) {
        ColorChoice::Auto if env_no_color || !std::io::stdout().is_terminal() => ColorChoice::Never,
        ColorChoice::Auto => ColorChoice::Always,
        choice => choice,
    }
}

/// Output color scheme.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Section headers and totals.
    pub fn header() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Unterminated-group warnings.
    pub fn warn() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Plain text (unchanged files, details).
    pub fn plain() -> ColorSpec {
        ColorSpec::new()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
