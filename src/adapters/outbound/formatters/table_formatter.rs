use super::display_condition;
use crate::application::read_models::ReportView;
use crate::ports::outbound::ReportFormatter;
use crate::rule_comparison::domain::MatchStatus;
use crate::shared::Result;
use owo_colors::OwoColorize;

const HEADERS: [&str; 4] = [
    "Component ID",
    "Development Condition",
    "Production Condition",
    "Status",
];

/// TableFormatter adapter for the default terminal view
///
/// Renders a fixed-width text table with a count footer. The status
/// column is colorized only when the output goes to a terminal; file
/// output stays free of escape sequences.
pub struct TableFormatter {
    colored: bool,
}

impl TableFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn status_cell(&self, status: MatchStatus, padded: String) -> String {
        if !self.colored {
            return padded;
        }
        match status {
            MatchStatus::Matching => padded.green().to_string(),
            MatchStatus::Different => padded.yellow().to_string(),
            MatchStatus::Missing => padded.red().to_string(),
        }
    }
}

impl ReportFormatter for TableFormatter {
    fn format(&self, view: &ReportView) -> Result<String> {
        let cells: Vec<[String; 4]> = view
            .rows
            .iter()
            .map(|row| {
                [
                    row.component.clone(),
                    display_condition(&row.dev_condition).to_string(),
                    display_condition(&row.prod_condition).to_string(),
                    row.status.as_str().to_uppercase(),
                ]
            })
            .collect();

        let mut widths: [usize; 4] = HEADERS.map(str::len);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut output = String::new();

        let header: Vec<String> = HEADERS
            .iter()
            .zip(widths.iter())
            .map(|(h, w)| pad(h, *w))
            .collect();
        output.push_str(&header.join("  "));
        output.push('\n');
        output.push_str(&widths.map(|w| "-".repeat(w)).join("  "));
        output.push('\n');

        for (row, row_cells) in view.rows.iter().zip(cells.iter()) {
            let mut rendered: Vec<String> = row_cells
                .iter()
                .zip(widths.iter())
                .map(|(cell, w)| pad(cell, *w))
                .collect();
            // Colorize after padding so escape codes don't skew widths.
            rendered[3] = self.status_cell(row.status, rendered[3].clone());
            output.push_str(rendered.join("  ").trim_end());
            output.push('\n');
        }

        output.push('\n');
        output.push_str(&format!("Total components: {}\n", view.total_count));
        output.push_str(&format!("Differences: {}\n", view.difference_count));

        Ok(output)
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    padded
}
