/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod report_request;

pub use output_format::OutputFormat;
pub use report_request::{ReportRequest, DEFAULT_INPUT_ROOT, DEP_EXTENSION, INFO_EXTENSION};
