//! pipo-diff - receiver determination comparison for SAP PI/PO
//!
//! This library compares two receiver determination XML exports (one per
//! environment) and reports, per component, whether the routing
//! conditions match, differ, or are missing on one side.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`rule_comparison`): Pure parsing, extraction and
//!   comparison logic and the domain models
//! - **Application Layer** (`application`): Use cases, read models and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pipo_diff::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let document_reader = FileSystemReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = CompareRulesUseCase::new(document_reader, progress_reporter);
//!
//! // Execute
//! let request = CompareRequest::new(PathBuf::from("dev.xml"), PathBuf::from("prod.xml"));
//! let response = use_case.execute(request)?;
//!
//! // Render the report
//! let filter = ReportFilter::new(ViewFilter::All, None);
//! let view = ReportViewBuilder::for_display(&response.report, &filter);
//! let formatter = TableFormatter::new(false);
//! println!("{}", formatter.format(&view)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod rule_comparison;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        CsvFormatter, JsonFormatter, MarkdownFormatter, TableFormatter,
    };
    pub use crate::application::dto::{
        CompareRequest, CompareResponse, ExportKind, OutputFormat,
    };
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::read_models::{ReportRow, ReportView, ReportViewBuilder};
    pub use crate::application::use_cases::{CompareRulesUseCase, ExportReportUseCase};
    pub use crate::ports::outbound::{
        DocumentReader, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::rule_comparison::domain::{
        ComparisonReport, ComparisonResult, ConditionRecord, Environment, MatchStatus,
    };
    pub use crate::rule_comparison::services::{ReportFilter, ViewFilter};
    pub use crate::shared::Result;
}
