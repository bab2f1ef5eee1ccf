// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading.
//!
//! The file format keeps the section and key names of the legacy
//! `config.ini`, so existing files load unchanged:
//!
//! ```toml
//! [libreoffice]
//! path = "/usr/bin/soffice"
//! args = ["--headless", "--convert-to", "rtf", "--outdir"]
//!
//! [extensions]
//! ext = [".doc", ".docx"]
//!
//! [rtf]
//! tags = ['{\info', '{\pict']
//! ```
//!
//! Every section is optional; unknown keys are errors.

pub mod defaults;
mod sections;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::strip::{CatalogError, PatternCatalog};

pub use sections::{ExtensionsConfig, LibreOfficeConfig, RtfConfig};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid [rtf] tags in {}: {source}", .path.display())]
    Tags {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

/// Full configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub libreoffice: LibreOfficeConfig,

    #[serde(default)]
    pub extensions: ExtensionsConfig,

    #[serde(default)]
    pub rtf: RtfConfig,
}

impl Config {
    /// Build the pattern catalog from `[rtf] tags`.
    pub fn catalog(&self) -> Result<PatternCatalog, CatalogError> {
        PatternCatalog::new(self.rtf.tags.iter().cloned())
    }

    /// Render as TOML, used by `rtfstrip init`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Parse config content. `path` is only used for error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.catalog().map_err(|source| ConfigError::Tags {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(config)
}

/// Load config from a file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&content, path)?;
    tracing::debug!(path = %path.display(), tags = config.rtf.tags.len(), "loaded config");
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
