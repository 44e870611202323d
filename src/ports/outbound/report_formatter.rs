use crate::application::read_models::ReportView;
use crate::shared::Result;

/// ReportFormatter port for rendering a comparison report
///
/// This port abstracts the rendering logic for the different output
/// shapes (terminal table, Markdown, JSON, CSV export).
pub trait ReportFormatter {
    /// Renders the given report view
    ///
    /// # Arguments
    /// * `view` - The projection of the comparison to render
    ///
    /// # Returns
    /// Rendered report content as a string
    ///
    /// # Errors
    /// Returns an error if rendering or serialization fails
    fn format(&self, view: &ReportView) -> Result<String>;
}
