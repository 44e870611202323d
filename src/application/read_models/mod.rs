//! Read models for query operations
//!
//! View-optimized structs that provide a denormalized projection of a
//! comparison report for rendering and export.

pub mod report_view;
pub mod report_view_builder;

pub use report_view::{ReportRow, ReportView};
pub use report_view_builder::ReportViewBuilder;
