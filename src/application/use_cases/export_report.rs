use crate::application::dto::ExportKind;
use crate::application::read_models::ReportViewBuilder;
use crate::ports::outbound::{OutputPresenter, ProgressReporter, ReportFormatter};
use crate::rule_comparison::domain::ComparisonReport;
use crate::shared::error::CompareError;
use crate::shared::Result;

/// ExportReportUseCase - spreadsheet export of a comparison report
///
/// Enforces the export preconditions, builds the export projection of
/// the report, renders it through the injected formatter, and hands the
/// result to the presenter. When a precondition fails, nothing is
/// written.
///
/// # Type Parameters
/// * `F` - ReportFormatter implementation (CSV in production wiring)
/// * `P` - OutputPresenter implementation
/// * `PR` - ProgressReporter implementation
pub struct ExportReportUseCase<F, P, PR> {
    formatter: F,
    presenter: P,
    progress_reporter: PR,
}

impl<F, P, PR> ExportReportUseCase<F, P, PR>
where
    F: ReportFormatter,
    P: OutputPresenter,
    PR: ProgressReporter,
{
    /// Creates a new ExportReportUseCase with injected dependencies
    pub fn new(formatter: F, presenter: P, progress_reporter: PR) -> Self {
        Self {
            formatter,
            presenter,
            progress_reporter,
        }
    }

    /// Executes the export against an existing report
    ///
    /// # Errors
    /// Returns [`CompareError::ExportPrecondition`] when the report has
    /// no rows at all, or when a differences export finds no qualifying
    /// rows. The report itself is left untouched either way.
    pub fn execute(&self, report: &ComparisonReport, kind: ExportKind) -> Result<()> {
        check_preconditions(report, kind)?;

        self.progress_reporter
            .report(&format!("📊 Exporting {}...", kind.describe()));

        let view = ReportViewBuilder::for_export(report, kind);
        let content = self.formatter.format(&view)?;
        self.presenter.present(&content)?;

        self.progress_reporter
            .report(&format!("✅ Exported {} row(s)", view.rows.len()));
        Ok(())
    }
}

fn check_preconditions(report: &ComparisonReport, kind: ExportKind) -> Result<()> {
    if report.is_empty() {
        return Err(CompareError::ExportPrecondition {
            message: "No data to export".to_string(),
            hint: "Run a comparison that yields at least one component first".to_string(),
        }
        .into());
    }

    if kind == ExportKind::Differences && !report.has_differences() {
        return Err(CompareError::ExportPrecondition {
            message: "No differences found to export".to_string(),
            hint: "Both environments match; use the full report export instead".to_string(),
        }
        .into());
    }

    Ok(())
}
