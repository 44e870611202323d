use super::comparison_result::ComparisonResult;

/// The full outcome of one comparison run.
///
/// This is the session-state value for a run: built in full by the
/// comparator, then passed by reference into filter, display, and export
/// calls. It is never mutated after construction; a new run produces a
/// new report.
///
/// `total_count` is the size of the join universe (every component seen
/// on either side); `difference_count` counts results whose status is
/// not `Matching`. Filtered projections of the report must not change
/// either count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    pub results: Vec<ComparisonResult>,
    pub total_count: usize,
    pub difference_count: usize,
}

impl ComparisonReport {
    pub fn new(results: Vec<ComparisonResult>) -> Self {
        let total_count = results.len();
        let difference_count = results.iter().filter(|r| r.is_difference()).count();
        Self {
            results,
            total_count,
            difference_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn has_differences(&self) -> bool {
        self.difference_count > 0
    }

    /// The non-matching results, in report order.
    pub fn differences(&self) -> impl Iterator<Item = &ComparisonResult> {
        self.results.iter().filter(|r| r.is_difference())
    }
}
