use pipo_diff::adapters::outbound::console::StderrProgressReporter;
use pipo_diff::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use pipo_diff::adapters::outbound::formatters::CsvFormatter;
use pipo_diff::application::dto::{CompareRequest, OutputFormat};
use pipo_diff::application::factories::FormatterFactory;
use pipo_diff::application::read_models::ReportViewBuilder;
use pipo_diff::application::use_cases::{CompareRulesUseCase, ExportReportUseCase};
use pipo_diff::cli::Args;
use pipo_diff::config::{discover_config, load_config_from_path, ConfigFile};
use pipo_diff::ports::outbound::{OutputPresenter, ReportFormatter};
use pipo_diff::rule_comparison::services::{ReportFilter, ViewFilter};
use pipo_diff::shared::error::ExitCode;
use pipo_diff::shared::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    match run() {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load config: explicit path, or auto-discovery in the working directory
    let config = match &args.config {
        Some(path) => load_config_from_path(Path::new(path))?,
        None => discover_config(Path::new("."))?.unwrap_or_default(),
    };

    // Precedence: CLI flag > config file > built-in default
    let format = resolve_format(&args, &config)?;
    let view = resolve_view(&args, &config)?;

    // Create adapters (Dependency Injection)
    let document_reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = CompareRulesUseCase::new(document_reader, progress_reporter);

    let request = CompareRequest::new(
        PathBuf::from(&args.dev_xml),
        PathBuf::from(&args.prod_xml),
    );

    // Execute use case
    let response = use_case.execute(request)?;
    let report = response.report;

    if let Some(kind) = args.export {
        // Spreadsheet export path: CSV to the requested or dated file
        let output_path = args
            .output
            .clone()
            .unwrap_or_else(|| kind.default_filename());
        let exporter = ExportReportUseCase::new(
            CsvFormatter::new(),
            FileSystemWriter::new(PathBuf::from(output_path)),
            StderrProgressReporter::new(),
        );
        exporter.execute(&report, kind)?;
    } else {
        // Display path: render the (filtered) report
        let filter = ReportFilter::new(view, args.search.clone());
        let view_model = ReportViewBuilder::for_display(&report, &filter);

        eprintln!("{}", FormatterFactory::progress_message(format));

        // Colors only when the report goes to the terminal
        let colored = args.output.is_none() && std::io::stdout().is_terminal();
        let formatter: Box<dyn ReportFormatter> = FormatterFactory::create(format, colored);
        let output = formatter.format(&view_model)?;

        let presenter: Box<dyn OutputPresenter> = match &args.output {
            Some(path) => Box::new(FileSystemWriter::new(PathBuf::from(path))),
            None => Box::new(StdoutPresenter::new()),
        };
        presenter.present(&output)?;
    }

    Ok(if report.has_differences() {
        ExitCode::DifferencesFound
    } else {
        ExitCode::Success
    })
}

fn resolve_format(args: &Args, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }
    Ok(config.display_format()?.unwrap_or(OutputFormat::Table))
}

fn resolve_view(args: &Args, config: &ConfigFile) -> Result<ViewFilter> {
    if let Some(view) = args.view {
        return Ok(view);
    }
    Ok(config.view_filter()?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(argv.iter().copied())
    }

    #[test]
    fn test_resolve_format_prefers_cli_flag() {
        let args = args(&["pipo-diff", "dev.xml", "prod.xml", "-f", "json"]);
        let config = ConfigFile {
            format: Some("markdown".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            resolve_format(&args, &config).unwrap(),
            OutputFormat::Json
        ));
    }

    #[test]
    fn test_resolve_format_falls_back_to_config() {
        let args = args(&["pipo-diff", "dev.xml", "prod.xml"]);
        let config = ConfigFile {
            format: Some("markdown".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            resolve_format(&args, &config).unwrap(),
            OutputFormat::Markdown
        ));
    }

    #[test]
    fn test_resolve_format_default_is_table() {
        let args = args(&["pipo-diff", "dev.xml", "prod.xml"]);
        assert!(matches!(
            resolve_format(&args, &ConfigFile::default()).unwrap(),
            OutputFormat::Table
        ));
    }

    #[test]
    fn test_resolve_view_default_is_all() {
        let args = args(&["pipo-diff", "dev.xml", "prod.xml"]);
        assert!(matches!(
            resolve_view(&args, &ConfigFile::default()).unwrap(),
            ViewFilter::All
        ));
    }

    #[test]
    fn test_resolve_view_from_config() {
        let args = args(&["pipo-diff", "dev.xml", "prod.xml"]);
        let config = ConfigFile {
            view: Some("differences".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            resolve_view(&args, &config).unwrap(),
            ViewFilter::Differences
        ));
    }
}
