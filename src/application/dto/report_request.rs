use std::path::PathBuf;

/// Extension of the package information report
pub const INFO_EXTENSION: &str = "info";

/// Extension of the dependency report
pub const DEP_EXTENSION: &str = "dep";

/// Default root name of both report files
pub const DEFAULT_INPUT_ROOT: &str = "pkg";

/// ReportRequest - request DTO for loading the dependency model
///
/// Both report files are derived from one root: `<root>.info` and `<root>.dep`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// Path of the `yum info` capture
    pub info_path: PathBuf,
    /// Path of the `yum deplist` capture
    pub dep_path: PathBuf,
}

impl ReportRequest {
    pub fn new(info_path: PathBuf, dep_path: PathBuf) -> Self {
        Self {
            info_path,
            dep_path,
        }
    }

    /// Builds the request from an input root such as `pkg` or `data/el7`
    pub fn from_input_root(root: &str) -> Self {
        Self::new(
            PathBuf::from(format!("{}.{}", root, INFO_EXTENSION)),
            PathBuf::from(format!("{}.{}", root, DEP_EXTENSION)),
        )
    }
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self::from_input_root(DEFAULT_INPUT_ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_root() {
        let request = ReportRequest::from_input_root("data/el7");
        assert_eq!(request.info_path, PathBuf::from("data/el7.info"));
        assert_eq!(request.dep_path, PathBuf::from("data/el7.dep"));
    }

    #[test]
    fn test_root_with_dots_is_not_treated_as_extension() {
        let request = ReportRequest::from_input_root("gemini.prod");
        assert_eq!(request.info_path, PathBuf::from("gemini.prod.info"));
    }

    #[test]
    fn test_default_uses_pkg_root() {
        let request = ReportRequest::default();
        assert_eq!(request.info_path, PathBuf::from("pkg.info"));
        assert_eq!(request.dep_path, PathBuf::from("pkg.dep"));
    }
}
