// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared setup for the processing commands.
//!
//! Resolves the config, the walk roots, and the files each stage works on.

use std::path::{Path, PathBuf};

use crate::config::{self, Config, ConfigError, defaults};
use crate::convert::{ConvertError, ConvertOutcome, Converter};
use crate::discovery;
use crate::runner::{FileOutcome, RunnerConfig, StripRunner};
use crate::strip::PatternCatalog;
use crate::walker::{FileWalker, WalkStats, WalkedFile, WalkerConfig};

/// Config together with the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// None when running on built-in defaults.
    pub path: Option<PathBuf>,
    pub catalog: PatternCatalog,
}

/// Discover and load the config for a run started in `cwd`.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig, ConfigError> {
    let Some(path) = discovery::resolve_config(explicit, cwd) else {
        return Ok(LoadedConfig {
            config: Config::default(),
            path: None,
            catalog: PatternCatalog::default(),
        });
    };
    let config = config::load(&path)?;
    let catalog = config.catalog().map_err(|source| ConfigError::Tags {
        path: path.clone(),
        source,
    })?;
    Ok(LoadedConfig {
        config,
        path: Some(path),
        catalog,
    })
}

/// Absolute walk roots; no paths means the current directory.
pub fn resolve_roots(paths: &[PathBuf], cwd: &Path) -> Vec<PathBuf> {
    if paths.is_empty() {
        return vec![cwd.to_path_buf()];
    }
    paths
        .iter()
        .map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                cwd.join(path)
            }
        })
        .collect()
}

/// Every RTF file under `roots`.
pub fn find_rtf(roots: &[PathBuf], max_depth: usize) -> (Vec<WalkedFile>, WalkStats) {
    let config = WalkerConfig {
        max_depth: Some(max_depth),
        ..WalkerConfig::default()
    }
    .with_extensions([defaults::extensions::RTF]);
    FileWalker::new(config).walk_all(roots)
}

/// Every convertible document under `roots`.
///
/// RTF files are never converted, even when listed in `[extensions]`.
pub fn find_documents(
    roots: &[PathBuf],
    config: &Config,
    max_depth: usize,
) -> (Vec<WalkedFile>, WalkStats) {
    let extensions: Vec<String> = config
        .extensions
        .normalized()
        .into_iter()
        .filter(|ext| ext != defaults::extensions::RTF)
        .collect();
    // An empty allow-list would let the walker accept any file.
    if extensions.is_empty() {
        return (Vec::new(), WalkStats::default());
    }
    let walker_config = WalkerConfig {
        max_depth: Some(max_depth),
        ..WalkerConfig::default()
    }
    .with_extensions(extensions);
    FileWalker::new(walker_config).walk_all(roots)
}

/// Strip every RTF file under `roots`.
pub fn strip_stage(
    roots: &[PathBuf],
    catalog: &PatternCatalog,
    max_depth: usize,
    runner: RunnerConfig,
) -> (Vec<FileOutcome>, WalkStats) {
    let (files, stats) = find_rtf(roots, max_depth);
    tracing::debug!(files = files.len(), "stripping");
    (StripRunner::new(runner).run(&files, catalog), stats)
}

/// Convert every document under `roots` to RTF.
///
/// Fails only when no converter can be found.
pub fn convert_stage(
    roots: &[PathBuf],
    config: &Config,
    tool: Option<&Path>,
    max_depth: usize,
) -> Result<(Vec<ConvertOutcome>, WalkStats), ConvertError> {
    let (files, stats) = find_documents(roots, config, max_depth);
    if files.is_empty() {
        return Ok((Vec::new(), stats));
    }
    let converter = Converter::resolve(tool, &config.libreoffice)?;
    tracing::debug!(documents = files.len(), "converting");
    let outcomes = converter.convert_all(files.iter().map(|f| f.path.as_path()));
    Ok((outcomes, stats))
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
