mod compare_rules;
mod export_report;

pub use compare_rules::CompareRulesUseCase;
pub use export_report::ExportReportUseCase;
