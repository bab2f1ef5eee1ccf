// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for
//! rtfstrip.toml, then falls back to a legacy config.ini in the starting
//! directory.

use std::path::{Path, PathBuf};

use crate::config::defaults::files::{CONFIG_NAME, LEGACY_CONFIG_NAME};

/// Find rtfstrip.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve the config file to load.
///
/// An explicit path wins; otherwise rtfstrip.toml is searched upward, then
/// config.ini is checked in `start_dir` only.
pub fn resolve_config(explicit: Option<&Path>, start_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = find_config(start_dir) {
        return Some(path);
    }
    let legacy = start_dir.join(LEGACY_CONFIG_NAME);
    legacy.is_file().then_some(legacy)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
