use crate::rule_comparison::domain::{ComparisonReport, ComparisonResult, MatchStatus};

/// Category filter over a comparison report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewFilter {
    #[default]
    All,
    Differences,
    Matching,
}

impl std::str::FromStr for ViewFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ViewFilter::All),
            "differences" | "diff" => Ok(ViewFilter::Differences),
            "matching" => Ok(ViewFilter::Matching),
            _ => Err(format!(
                "Invalid view: {}. Please specify 'all', 'differences' or 'matching'",
                s
            )),
        }
    }
}

impl ViewFilter {
    fn accepts(self, result: &ComparisonResult) -> bool {
        match self {
            ViewFilter::All => true,
            ViewFilter::Differences => result.status != MatchStatus::Matching,
            ViewFilter::Matching => result.status == MatchStatus::Matching,
        }
    }
}

/// Combined category and free-text filter.
///
/// The search term matches case-insensitively against the component name
/// and both condition strings. The filter yields a borrowed projection
/// of the report; the report itself stays the source of truth, and its
/// counts are unaffected by filtering.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    view: ViewFilter,
    search: Option<String>,
}

impl ReportFilter {
    pub fn new(view: ViewFilter, search: Option<String>) -> Self {
        let search = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        Self { view, search }
    }

    pub fn matches(&self, result: &ComparisonResult) -> bool {
        self.view.accepts(result) && self.matches_search(result)
    }

    pub fn apply<'a>(&self, report: &'a ComparisonReport) -> Vec<&'a ComparisonResult> {
        report.results.iter().filter(|r| self.matches(r)).collect()
    }

    fn matches_search(&self, result: &ComparisonResult) -> bool {
        let Some(term) = &self.search else {
            return true;
        };
        result.component.to_lowercase().contains(term)
            || result.dev_condition.to_lowercase().contains(term)
            || result.prod_condition.to_lowercase().contains(term)
    }
}
