// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern catalog of group-opening markers.

use memchr::memmem::Finder;
use thiserror::Error;

use crate::config::defaults;

/// Errors raised while building a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("pattern #{index} is empty")]
    EmptyPattern { index: usize },
}

/// A compiled marker: the literal text plus its substring finder.
#[derive(Debug, Clone)]
pub struct Pattern {
    text: String,
    finder: Finder<'static>,
}

impl Pattern {
    fn new(text: String) -> Self {
        let finder = Finder::new(text.as_bytes()).into_owned();
        Self { text, finder }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Find the first occurrence at or after `from`.
    pub fn find_from(&self, haystack: &str, from: usize) -> Option<usize> {
        let tail = haystack.as_bytes().get(from..)?;
        self.finder.find(tail).map(|pos| pos + from)
    }
}

/// Ordered, read-only set of markers to strip.
///
/// Order decides strip order only. Shared between worker threads without
/// synchronization.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

impl PatternCatalog {
    /// Build a catalog, rejecting empty markers.
    pub fn new<I, S>(patterns: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut compiled = Vec::new();
        for (index, text) in patterns.into_iter().enumerate() {
            let text = text.into();
            if text.is_empty() {
                return Err(CatalogError::EmptyPattern { index });
            }
            compiled.push(Pattern::new(text));
        }
        Ok(Self { patterns: compiled })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Marker strings in catalog order.
    pub fn markers(&self) -> Vec<String> {
        self.patterns.iter().map(|p| p.text.clone()).collect()
    }
}

impl Default for PatternCatalog {
    /// The built-in marker list (headers, footers, tables, pictures, metadata).
    fn default() -> Self {
        Self {
            patterns: defaults::rtf::tags().into_iter().map(Pattern::new).collect(),
        }
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
