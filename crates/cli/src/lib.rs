// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rtfstrip library.
//!
//! Removes brace-delimited groups (headers, footers, document metadata,
//! embedded pictures) from RTF files, and converts office documents to RTF
//! through LibreOffice.

pub mod cli;
pub mod color;
pub mod config;
pub mod convert;
pub mod discovery;
pub mod document;
pub mod error;
pub mod file_reader;
pub mod pipeline;
pub mod report;
pub mod runner;
pub mod strip;
pub mod verbose;
pub mod walker;

#[cfg(test)]
mod test_utils;
