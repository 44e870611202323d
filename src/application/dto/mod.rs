/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod compare_request;
mod compare_response;
mod export_kind;
mod output_format;

pub use compare_request::CompareRequest;
pub use compare_response::CompareResponse;
pub use export_kind::ExportKind;
pub use output_format::OutputFormat;
