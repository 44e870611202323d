use crate::application::dto::{CompareRequest, CompareResponse};
use crate::ports::outbound::{DocumentReader, ProgressReporter};
use crate::rule_comparison::domain::{ComparisonReport, Environment};
use crate::rule_comparison::services::{condition_extractor, document_parser, rule_comparator};
use crate::shared::error::CompareError;
use crate::shared::Result;
use std::path::Path;

/// CompareRulesUseCase - core use case for one comparison run
///
/// Orchestrates the pipeline read -> empty-check -> parse -> extract ->
/// compare, with the development side always processed first. Both
/// infrastructure dependencies are injected generically.
///
/// A run either completes and returns a full report or fails before any
/// result is produced; there is no partial output.
///
/// # Type Parameters
/// * `DR` - DocumentReader implementation
/// * `PR` - ProgressReporter implementation
pub struct CompareRulesUseCase<DR, PR> {
    document_reader: DR,
    progress_reporter: PR,
}

impl<DR, PR> CompareRulesUseCase<DR, PR>
where
    DR: DocumentReader,
    PR: ProgressReporter,
{
    /// Creates a new CompareRulesUseCase with injected dependencies
    pub fn new(document_reader: DR, progress_reporter: PR) -> Self {
        Self {
            document_reader,
            progress_reporter,
        }
    }

    /// Executes the comparison
    ///
    /// # Arguments
    /// * `request` - Paths to the development and production exports
    ///
    /// # Returns
    /// CompareResponse wrapping the immutable comparison report
    pub fn execute(&self, request: CompareRequest) -> Result<CompareResponse> {
        let dev_text = self.read_side(Environment::Development, &request.dev_path)?;
        let prod_text = self.read_side(Environment::Production, &request.prod_path)?;

        // Blank inputs are rejected before any parsing starts.
        ensure_not_blank(Environment::Development, &dev_text)?;
        ensure_not_blank(Environment::Production, &prod_text)?;

        self.progress_reporter
            .start_busy("Comparing receiver determination rules...");

        let report = match run_comparison(&dev_text, &prod_text) {
            Ok(report) => report,
            Err(e) => {
                self.progress_reporter.report_error("❌ Comparison aborted");
                return Err(e);
            }
        };

        self.progress_reporter.finish_busy(&format!(
            "✅ Compared {} component(s), found {} difference(s)",
            report.total_count, report.difference_count
        ));

        Ok(CompareResponse::new(report))
    }

    fn read_side(&self, env: Environment, path: &Path) -> Result<String> {
        self.progress_reporter
            .report(&format!("📖 Loading {} XML from: {}", env, path.display()));
        self.document_reader.read_document(path)
    }
}

fn ensure_not_blank(env: Environment, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(CompareError::EmptyInput {
            side: env.to_string(),
        }
        .into());
    }
    Ok(())
}

/// The synchronous pipeline core. Parses and extracts dev before prod;
/// the comparison itself does not depend on that order.
fn run_comparison(dev_text: &str, prod_text: &str) -> Result<ComparisonReport> {
    let dev_records = {
        let doc = document_parser::parse(Environment::Development, dev_text)?;
        condition_extractor::extract(&doc)
    };
    let prod_records = {
        let doc = document_parser::parse(Environment::Production, prod_text)?;
        condition_extractor::extract(&doc)
    };

    Ok(rule_comparator::compare(&dev_records, &prod_records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_not_blank_accepts_content() {
        assert!(ensure_not_blank(Environment::Development, "<root/>").is_ok());
    }

    #[test]
    fn test_ensure_not_blank_rejects_whitespace() {
        let result = ensure_not_blank(Environment::Production, "  \n\t ");
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("production XML input is empty"));
    }

    #[test]
    fn test_run_comparison_pipeline() {
        let dev = "<root><ReceiverRule><ComponentID>CompX</ComponentID>\
                   <AtomicConditionBlock><AtomicCondition>\
                   <LeftExtractor><Value>A</Value></LeftExtractor>\
                   <Operator>EQ</Operator>\
                   <RightExtractor><Value>1</Value></RightExtractor>\
                   </AtomicCondition></AtomicConditionBlock></ReceiverRule></root>";
        let report = run_comparison(dev, dev).unwrap();
        assert_eq!(report.total_count, 1);
        assert_eq!(report.difference_count, 0);
        assert_eq!(report.results[0].dev_condition, "A = 1");
    }

    #[test]
    fn test_run_comparison_fails_on_malformed_dev() {
        let result = run_comparison("<broken", "<root/>");
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("development"));
    }
}
