// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stripping driver.
//!
//! For each pattern in catalog order the driver searches the current buffer,
//! strips the group at the first hit, and searches again from scratch until
//! the pattern no longer occurs. Each successful strip replaces the buffer.
//!
//! When the input itself is a single group (only whitespace after it), that
//! group is the document's root and is never stripped. Root status is decided
//! once from the input, so the result does not depend on pattern order.

use std::borrow::Cow;

use serde::Serialize;

use super::catalog::PatternCatalog;
use super::group::{excise, locate_group_end};

/// A pattern occurrence whose group never closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedGroup {
    pub pattern: String,
    /// Byte offset of the occurrence in the buffer at the time it was found.
    pub offset: usize,
}

/// Result of stripping one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    pub text: String,
    /// Number of groups removed.
    pub removed: usize,
    /// Occurrences left in place because their group never closes.
    pub malformed: Vec<MalformedGroup>,
}

impl StripOutcome {
    pub fn changed(&self) -> bool {
        self.removed > 0
    }
}

/// Strip every catalog group from `buffer`, returning the cleaned text.
pub fn strip_all(buffer: &str, catalog: &PatternCatalog) -> String {
    strip(buffer, catalog).text
}

/// Strip every catalog group from `buffer`, recording what happened.
pub fn strip(buffer: &str, catalog: &PatternCatalog) -> StripOutcome {
    let keep_root = is_root_group(buffer);
    let mut current = buffer.to_string();
    let mut removed = 0;
    let mut malformed = Vec::new();

    for pattern in catalog.iter() {
        let mut from = 0;
        while let Some(open) = pattern.find_from(&current, from) {
            let Some(end) = locate_group_end(&current, open) else {
                tracing::debug!(
                    pattern = pattern.as_str(),
                    offset = open,
                    "group never closes, leaving it in place"
                );
                malformed.push(MalformedGroup {
                    pattern: pattern.as_str().to_string(),
                    offset: open,
                });
                break;
            };
            if open == 0 && keep_root {
                from = 1;
                continue;
            }
            current = excise(&current, open, end);
            removed += 1;
            from = 0;
        }
    }

    tracing::debug!(
        removed,
        malformed = malformed.len(),
        before = buffer.len(),
        after = current.len(),
        "stripped buffer"
    );

    StripOutcome {
        text: current,
        removed,
        malformed,
    }
}

/// Whether `buffer` is one group opening at offset 0, followed by nothing but
/// whitespace.
///
/// Stripping inside that group keeps it balanced and at offset 0, so the
/// answer holds for every intermediate buffer.
fn is_root_group(buffer: &str) -> bool {
    locate_group_end(buffer, 0).is_some_and(|end| buffer[end..].trim().is_empty())
}

/// Collapse line terminators to single spaces.
///
/// `\r\n`, a lone `\r` and a lone `\n` each become one space, so a group
/// spread over several lines is scanned as one run.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains(['\r', '\n']) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", " ").replace(['\r', '\n'], " "))
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
