/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod formatter;
pub mod output_presenter;
pub mod report_reader;

pub use crate::dependency_model::domain::DiagnosticsSink;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use report_reader::ReportReader;
