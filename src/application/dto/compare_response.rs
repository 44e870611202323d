use crate::rule_comparison::domain::ComparisonReport;

/// CompareResponse - result of one comparison run
///
/// Wraps the immutable report produced by the comparator. Subsequent
/// filter, display, and export calls borrow the report from here; there
/// is no other run state.
#[derive(Debug, Clone)]
pub struct CompareResponse {
    pub report: ComparisonReport,
}

impl CompareResponse {
    pub fn new(report: ComparisonReport) -> Self {
        Self { report }
    }
}
