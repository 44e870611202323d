use serde::Serialize;
use std::fmt;

/// Classification of one component across both environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Matching,
    Different,
    Missing,
}

impl MatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Matching => "matching",
            MatchStatus::Different => "different",
            MatchStatus::Missing => "missing",
        }
    }

    /// Status icon used in rendered reports.
    pub fn icon(self) -> &'static str {
        match self {
            MatchStatus::Matching => "✅",
            MatchStatus::Different => "⚠️",
            MatchStatus::Missing => "❌",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the comparison: a component joined across both sides.
///
/// `status` is derived by the comparator, never set directly. A side
/// without a record for the component carries
/// [`ComparisonResult::NOT_CONFIGURED`] as its condition and an empty
/// description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    pub component: String,
    pub dev_condition: String,
    pub prod_condition: String,
    pub dev_description: String,
    pub prod_description: String,
    pub status: MatchStatus,
}

impl ComparisonResult {
    /// Sentinel condition for a side that has no record for the component.
    pub const NOT_CONFIGURED: &'static str = "-";

    /// True for every status except `Matching`.
    pub fn is_difference(&self) -> bool {
        self.status != MatchStatus::Matching
    }
}
