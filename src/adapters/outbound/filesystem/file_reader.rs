use crate::ports::outbound::ReportReader;
use crate::shared::error::YumDepsError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum report size (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading the captured reports
///
/// This adapter implements the ReportReader port on top of the local file
/// system. Each report is read completely in one call, so the file handle is
/// released before parsing starts.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        // Get file metadata without following symlinks
        let metadata = fs::symlink_metadata(path).map_err(|e| YumDepsError::FileReadError {
            path: path.to_path_buf(),
            details: format!("Failed to read metadata: {}", e),
        })?;

        if metadata.is_symlink() {
            return Err(YumDepsError::SecurityError {
                path: path.to_path_buf(),
                reason: "Report file is a symbolic link".to_string(),
                hint: "Pass the path of the captured report itself".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            return Err(YumDepsError::FileReadError {
                path: path.to_path_buf(),
                details: "Not a regular file".to_string(),
            }
            .into());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            return Err(YumDepsError::SecurityError {
                path: path.to_path_buf(),
                reason: format!(
                    "File is too large ({} bytes). Maximum allowed size is {} bytes",
                    file_size, MAX_FILE_SIZE
                ),
                hint: "Capture the report for a smaller package set".to_string(),
            }
            .into());
        }

        fs::read_to_string(path).map_err(|e| {
            YumDepsError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl ReportReader for FileSystemReader {
    fn read_report(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(YumDepsError::InputFileNotFound {
                path: path.to_path_buf(),
                suggestion: "Both <root>.info and <root>.dep must exist.\n   \
                             Generate them with yum info / yum deplist, or pick another root with --input-root."
                    .to_string(),
            }
            .into());
        }

        self.safe_read_file(path)
    }
}
