// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Balanced-group stripping for RTF text.
//!
//! Removes every group opened by a catalog pattern, nested groups included,
//! and leaves all other bytes untouched:
//! - [`catalog`]: ordered list of group-opening markers
//! - [`group`]: depth-counting group locator and excision
//! - [`driver`]: per-pattern search/strip loop
//!
//! Delimiters are counted without regard to RTF escapes, so `\{` and `\}`
//! inside a stripped group are treated as structural.

pub mod catalog;
pub mod driver;
pub mod group;

pub use catalog::{CatalogError, PatternCatalog};
pub use driver::{MalformedGroup, StripOutcome, normalize_newlines, strip, strip_all};
pub use group::{excise, locate_group_end};
