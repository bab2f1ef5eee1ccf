// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file sections.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// `[libreoffice]`: the external document converter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LibreOfficeConfig {
    /// Converter executable (None = auto-detect).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Arguments placed before the output folder and the source file.
    #[serde(default = "defaults::converter::args")]
    pub args: Vec<String>,
}

impl Default for LibreOfficeConfig {
    fn default() -> Self {
        Self {
            path: None,
            args: defaults::converter::args(),
        }
    }
}

/// `[extensions]`: which documents get converted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExtensionsConfig {
    /// Allowed extensions, with or without the leading dot.
    #[serde(default = "defaults::extensions::documents")]
    pub ext: Vec<String>,
}

impl Default for ExtensionsConfig {
    fn default() -> Self {
        Self {
            ext: defaults::extensions::documents(),
        }
    }
}

impl ExtensionsConfig {
    /// Extensions lowercased and without leading dots.
    pub fn normalized(&self) -> Vec<String> {
        self.ext
            .iter()
            .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect()
    }
}

/// `[rtf]`: what gets stripped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RtfConfig {
    /// Group openers to strip, in order.
    #[serde(default = "defaults::rtf::tags")]
    pub tags: Vec<String>,
}

impl Default for RtfConfig {
    fn default() -> Self {
        Self {
            tags: defaults::rtf::tags(),
        }
    }
}
