use crate::rule_comparison::domain::{ComparisonResult, MatchStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One renderable row of a comparison report.
///
/// Keys serialize camelCase so the JSON output mirrors the record shape
/// consumers of the original tooling already know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub component: String,
    pub dev_condition: String,
    pub prod_condition: String,
    pub dev_description: String,
    pub prod_description: String,
    pub status: MatchStatus,
}

impl From<&ComparisonResult> for ReportRow {
    fn from(result: &ComparisonResult) -> Self {
        Self {
            component: result.component.clone(),
            dev_condition: result.dev_condition.clone(),
            prod_condition: result.prod_condition.clone(),
            dev_description: result.dev_description.clone(),
            prod_description: result.prod_description.clone(),
            status: result.status,
        }
    }
}

/// Derived projection of one comparison run, consumed by formatters.
///
/// Rows may be a filtered or export-selected subset; `total_count` and
/// `difference_count` always reflect the full report. The view is never
/// the source of truth - rebuilding it from the report is always valid.
#[derive(Debug, Clone)]
pub struct ReportView {
    /// Identity of this rendering of the report
    pub run_id: Uuid,
    /// Generation timestamp, also used for the export timestamp column
    pub generated_at: DateTime<Utc>,
    pub total_count: usize,
    pub difference_count: usize,
    /// Whether description columns belong in the rendered output
    pub include_descriptions: bool,
    pub rows: Vec<ReportRow>,
}
