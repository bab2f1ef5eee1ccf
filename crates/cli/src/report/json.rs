// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::io::Write;

use serde_json::json;
use termcolor::WriteColor;

use super::{ReportFormatter, RunReport};

/// JSON format report formatter.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn to_value(&self, report: &RunReport) -> anyhow::Result<serde_json::Value> {
        let mut output = serde_json::Map::new();
        output.insert("dry_run".to_string(), json!(report.dry_run));

        if let Some(outcomes) = &report.convert {
            output.insert(
                "convert".to_string(),
                json!({
                    "totals": report.convert_totals(),
                    "files": outcomes,
                }),
            );
        }
        if let Some(outcomes) = &report.strip {
            output.insert(
                "strip".to_string(),
                json!({
                    "totals": report.strip_totals(),
                    "files": outcomes,
                }),
            );
        }

        Ok(serde_json::Value::Object(output))
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_to(&self, w: &mut dyn WriteColor, report: &RunReport) -> anyhow::Result<()> {
        let value = self.to_value(report)?;
        serde_json::to_writer_pretty(&mut *w, &value)?;
        writeln!(w)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
