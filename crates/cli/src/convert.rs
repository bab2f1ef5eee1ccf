// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Document conversion through an external office suite.
//!
//! Each source document is converted to RTF next to itself by running
//! `<tool> <args...> <source folder> <source file>`, the LibreOffice
//! `--convert-to rtf --outdir` form. Files are converted one at a time since
//! headless office instances share a user profile.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;
use thiserror::Error;

use crate::config::LibreOfficeConfig;
use crate::config::defaults;

/// Converter errors.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("document converter not found (looked for {looked_for}); set [libreoffice] path or pass --tool")]
    ToolNotFound { looked_for: String },

    #[error("failed to run {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {reason}", .path.display())]
    Failed { path: PathBuf, reason: String },
}

/// Result for one source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConvertOutcome {
    Converted { source: PathBuf, output: PathBuf },
    Failed { source: PathBuf, error: String },
}

impl ConvertOutcome {
    pub fn source(&self) -> &Path {
        match self {
            ConvertOutcome::Converted { source, .. } | ConvertOutcome::Failed { source, .. } => {
                source
            }
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ConvertOutcome::Failed { .. })
    }
}

/// A resolved converter invocation.
#[derive(Debug, Clone)]
pub struct Converter {
    program: PathBuf,
    args: Vec<String>,
}

impl Converter {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Resolve the converter executable.
    ///
    /// Order: `explicit`, then `[libreoffice] path`, then the system
    /// install location, then `soffice`/`libreoffice` on `PATH`.
    pub fn resolve(explicit: Option<&Path>, config: &LibreOfficeConfig) -> Result<Self, ConvertError> {
        let configured = explicit.or(config.path.as_deref());
        let program = match configured {
            Some(path) => find_program(path).ok_or_else(|| ConvertError::ToolNotFound {
                looked_for: path.display().to_string(),
            })?,
            None => detect_program().ok_or_else(|| ConvertError::ToolNotFound {
                looked_for: std::iter::once(defaults::converter::SYSTEM_PATH)
                    .chain(defaults::converter::PROGRAM_NAMES.iter().copied())
                    .collect::<Vec<_>>()
                    .join(", "),
            })?,
        };
        tracing::debug!(program = %program.display(), "resolved document converter");
        Ok(Self::new(program, config.args.clone()))
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Build the command converting `source` into its own folder.
    pub fn command(&self, source: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(output_dir(source))
            .arg(source);
        cmd
    }

    /// Convert one document, returning the expected RTF path.
    ///
    /// Office suites exit 0 even when a document fails to load and report
    /// the problem on stderr, so any stderr output counts as a failure.
    pub fn convert(&self, source: &Path) -> Result<PathBuf, ConvertError> {
        let output = self
            .command(source)
            .output()
            .map_err(|err| ConvertError::Spawn {
                program: self.program.clone(),
                source: err,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            let reason = first_line(&stderr)
                .map(|line| format!("{} ({})", line, output.status))
                .unwrap_or_else(|| format!("converter exited with {}", output.status));
            return Err(ConvertError::Failed {
                path: source.to_path_buf(),
                reason,
            });
        }
        if let Some(line) = first_line(&stderr) {
            return Err(ConvertError::Failed {
                path: source.to_path_buf(),
                reason: line.to_string(),
            });
        }

        Ok(rtf_path(source))
    }

    /// Convert every document in order.
    pub fn convert_all<'a, I>(&self, sources: I) -> Vec<ConvertOutcome>
    where
        I: IntoIterator<Item = &'a Path>,
    {
        sources
            .into_iter()
            .map(|source| match self.convert(source) {
                Ok(output) => ConvertOutcome::Converted {
                    source: source.to_path_buf(),
                    output,
                },
                Err(err) => {
                    tracing::warn!("{}", err);
                    ConvertOutcome::Failed {
                        source: source.to_path_buf(),
                        error: err.to_string(),
                    }
                }
            })
            .collect()
    }
}

/// Folder the converter writes into: the source's own folder.
pub fn output_dir(source: &Path) -> PathBuf {
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Path of the RTF produced for `source`.
pub fn rtf_path(source: &Path) -> PathBuf {
    source.with_extension(defaults::extensions::RTF)
}

fn first_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|line| !line.is_empty())
}

/// Resolve a configured program: an existing file, or a name on `PATH`.
fn find_program(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    which::which(path).ok()
}

fn detect_program() -> Option<PathBuf> {
    let system = Path::new(defaults::converter::SYSTEM_PATH);
    if system.is_file() {
        return Some(system.to_path_buf());
    }
    defaults::converter::PROGRAM_NAMES
        .iter()
        .find_map(|name| which::which(name).ok())
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
