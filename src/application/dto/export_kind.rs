use chrono::Utc;

/// Kind of spreadsheet export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Non-matching rows only, without descriptions
    Differences,
    /// Every row, with both descriptions
    Full,
}

impl ExportKind {
    /// Human-readable label used in progress messages.
    pub fn describe(self) -> &'static str {
        match self {
            ExportKind::Differences => "differences",
            ExportKind::Full => "full report",
        }
    }

    /// Dated default output filename, used when no --output is given.
    pub fn default_filename(self) -> String {
        let date = Utc::now().format("%Y-%m-%d");
        match self {
            ExportKind::Differences => format!("receiver_rules_differences_{}.csv", date),
            ExportKind::Full => format!("receiver_rules_full_report_{}.csv", date),
        }
    }
}

impl std::str::FromStr for ExportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "differences" | "diff" => Ok(ExportKind::Differences),
            "full" => Ok(ExportKind::Full),
            _ => Err(format!(
                "Invalid export kind: {}. Please specify 'differences' or 'full'",
                s
            )),
        }
    }
}
