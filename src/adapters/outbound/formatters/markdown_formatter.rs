use crate::application::read_models::{ReportRow, ReportView};
use crate::ports::outbound::ReportFormatter;
use crate::rule_comparison::domain::ComparisonResult;
use crate::shared::Result;

/// Markdown table header for comparison rows
const TABLE_HEADER: &str =
    "| Component ID | Development Condition | Production Condition | Status |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str =
    "|--------------|-----------------------|----------------------|--------|\n";

/// MarkdownFormatter adapter for report-style output
///
/// This adapter implements the ReportFormatter port for Markdown,
/// suitable for pasting into wikis and transport tickets.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn condition_cell(condition: &str) -> String {
        if condition == ComparisonResult::NOT_CONFIGURED {
            "*Not configured*".to_string()
        } else {
            Self::escape_markdown_table_cell(condition)
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, view: &ReportView) {
        output.push_str("# Receiver Determination Comparison\n\n");
        output.push_str(&format!(
            "Generated: {}\n\n",
            view.generated_at.to_rfc3339()
        ));
        output.push_str(&format!(
            "**Total components:** {}  \n**Differences:** {}\n\n",
            view.total_count, view.difference_count
        ));
    }

    fn render_rows(&self, output: &mut String, rows: &[ReportRow]) {
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for row in rows {
            output.push_str(&format!(
                "| {} | {} | {} | {} {} |\n",
                Self::escape_markdown_table_cell(&row.component),
                Self::condition_cell(&row.dev_condition),
                Self::condition_cell(&row.prod_condition),
                row.status.icon(),
                row.status.as_str().to_uppercase(),
            ));
        }
        output.push('\n');
    }

    /// Lists non-empty rule descriptions, one entry per annotated side.
    fn render_notes(&self, output: &mut String, rows: &[ReportRow]) {
        let annotated: Vec<&ReportRow> = rows
            .iter()
            .filter(|r| !r.dev_description.is_empty() || !r.prod_description.is_empty())
            .collect();
        if annotated.is_empty() {
            return;
        }

        output.push_str("## Component Notes\n\n");
        for row in annotated {
            output.push_str(&format!(
                "- **{}**",
                Self::escape_markdown_table_cell(&row.component)
            ));
            if !row.dev_description.is_empty() {
                output.push_str(&format!(
                    " dev: {}",
                    Self::escape_markdown_table_cell(&row.dev_description)
                ));
            }
            if !row.prod_description.is_empty() {
                output.push_str(&format!(
                    " prod: {}",
                    Self::escape_markdown_table_cell(&row.prod_description)
                ));
            }
            output.push('\n');
        }
        output.push('\n');
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, view: &ReportView) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, view);
        self.render_rows(&mut output, &view.rows);
        if view.include_descriptions {
            self.render_notes(&mut output, &view.rows);
        }
        Ok(output)
    }
}
