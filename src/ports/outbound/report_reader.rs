use crate::shared::Result;
use std::path::Path;

/// ReportReader port for reading the captured yum reports
///
/// This port abstracts the file system operations needed to read
/// the `<root>.info` and `<root>.dep` files.
pub trait ReportReader {
    /// Reads a whole report file
    ///
    /// # Arguments
    /// * `path` - Path to the report file
    ///
    /// # Returns
    /// The raw content of the report
    ///
    /// # Errors
    /// Returns an error if:
    /// - The report file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_report(&self, path: &Path) -> Result<String>;
}
