use crate::application::read_models::{ReportRow, ReportView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Serialized report envelope. Field names match the record shape the
/// original tooling exposes, so downstream scripts can consume either.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    run_id: &'a Uuid,
    generated_at: &'a DateTime<Utc>,
    total_count: usize,
    difference_count: usize,
    results: &'a [ReportRow],
}

/// JsonFormatter adapter for machine-readable output
///
/// This adapter implements the ReportFormatter port for pretty-printed
/// JSON on stdout or a file.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, view: &ReportView) -> Result<String> {
        let report = JsonReport {
            run_id: &view.run_id,
            generated_at: &view.generated_at,
            total_count: view.total_count,
            difference_count: view.difference_count,
            results: &view.rows,
        };

        let mut output =
            serde_json::to_string_pretty(&report).context("Failed to serialize JSON report")?;
        output.push('\n');
        Ok(output)
    }
}
