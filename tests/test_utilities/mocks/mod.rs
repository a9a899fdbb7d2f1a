/// Mock implementations for testing
mod mock_diagnostics;
mod mock_report_reader;

#[allow(unused_imports)]
pub use mock_diagnostics::MockDiagnostics;
#[allow(unused_imports)]
pub use mock_report_reader::MockReportReader;
