use super::report_view::{ReportRow, ReportView};
use crate::application::dto::ExportKind;
use crate::rule_comparison::domain::ComparisonReport;
use crate::rule_comparison::services::ReportFilter;
use chrono::Utc;
use uuid::Uuid;

/// Builds [`ReportView`] projections from a comparison report.
pub struct ReportViewBuilder;

impl ReportViewBuilder {
    /// Projection for interactive display: rows pass through the user's
    /// view/search filter, counts stay those of the full report.
    pub fn for_display(report: &ComparisonReport, filter: &ReportFilter) -> ReportView {
        let rows = filter.apply(report).into_iter().map(ReportRow::from).collect();
        Self::view(report, rows, true)
    }

    /// Projection for spreadsheet export: the differences kind keeps
    /// non-matching rows without descriptions, the full kind keeps every
    /// row with both descriptions.
    pub fn for_export(report: &ComparisonReport, kind: ExportKind) -> ReportView {
        let (rows, include_descriptions) = match kind {
            ExportKind::Differences => (
                report.differences().map(ReportRow::from).collect(),
                false,
            ),
            ExportKind::Full => (
                report.results.iter().map(ReportRow::from).collect(),
                true,
            ),
        };
        Self::view(report, rows, include_descriptions)
    }

    fn view(
        report: &ComparisonReport,
        rows: Vec<ReportRow>,
        include_descriptions: bool,
    ) -> ReportView {
        ReportView {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            total_count: report.total_count,
            difference_count: report.difference_count,
            include_descriptions,
            rows,
        }
    }
}
