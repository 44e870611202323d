use super::display_condition;
use crate::application::read_models::{ReportRow, ReportView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Column headers for the differences export
const DIFF_HEADERS: [&str; 5] = [
    "Component ID",
    "Development Condition",
    "Production Condition",
    "Status",
    "Timestamp",
];

/// Column headers for the full report export
const FULL_HEADERS: [&str; 7] = [
    "Component ID",
    "Development Condition",
    "Production Condition",
    "Status",
    "Dev Description",
    "Prod Description",
    "Timestamp",
];

/// CsvFormatter adapter for spreadsheet export
///
/// This adapter implements the ReportFormatter port for CSV, the
/// spreadsheet-compatible export format. Whether description columns
/// are included follows the view (differences exports omit them, full
/// report exports carry them).
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Quotes a field when it contains separators, quotes, or newlines;
    /// inner quotes are doubled per RFC 4180.
    fn escape_csv_field(text: &str) -> String {
        if text.contains(',') || text.contains('"') || text.contains('\n') || text.contains('\r') {
            format!("\"{}\"", text.replace('"', "\"\""))
        } else {
            text.to_string()
        }
    }

    fn render_row(row: &ReportRow, view: &ReportView) -> String {
        let timestamp = view.generated_at.to_rfc3339();
        let mut fields = vec![
            Self::escape_csv_field(&row.component),
            Self::escape_csv_field(display_condition(&row.dev_condition)),
            Self::escape_csv_field(display_condition(&row.prod_condition)),
            row.status.as_str().to_uppercase(),
        ];
        if view.include_descriptions {
            fields.push(Self::escape_csv_field(&row.dev_description));
            fields.push(Self::escape_csv_field(&row.prod_description));
        }
        fields.push(timestamp);
        fields.join(",")
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, view: &ReportView) -> Result<String> {
        let headers: &[&str] = if view.include_descriptions {
            &FULL_HEADERS
        } else {
            &DIFF_HEADERS
        };

        let mut output = headers.join(",");
        output.push('\n');

        for row in &view.rows {
            output.push_str(&Self::render_row(row, view));
            output.push('\n');
        }

        Ok(output)
    }
}
