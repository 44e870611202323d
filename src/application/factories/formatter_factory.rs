use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TableFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating display formatters
///
/// Encapsulates the selection of formatter adapters for the requested
/// display format. Lives in the application layer because it maps an
/// application concept (the output format) onto infrastructure.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The display format to create a formatter for
    /// * `colored` - Whether the table formatter may emit ANSI colors
    ///   (disabled when writing to a file)
    pub fn create(format: OutputFormat, colored: bool) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Table => Box::new(TableFormatter::new(colored)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Table => "📝 Rendering comparison table...",
            OutputFormat::Markdown => "📝 Generating Markdown report...",
            OutputFormat::Json => "📝 Generating JSON report...",
        }
    }
}
