pub mod condition_extractor;
pub mod document_parser;
pub mod report_filter;
pub mod rule_comparator;

pub use report_filter::{ReportFilter, ViewFilter};
