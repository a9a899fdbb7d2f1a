use std::collections::HashMap;
use std::path::{Path, PathBuf};
use yum_deps::prelude::*;

/// Mock ReportReader serving report contents from memory
pub struct MockReportReader {
    pub reports: HashMap<PathBuf, String>,
}

#[allow(dead_code)]
impl MockReportReader {
    /// Serves `info` as `<root>.info` and `dep` as `<root>.dep`
    pub fn new(root: &str, info: &str, dep: &str) -> Self {
        let request = ReportRequest::from_input_root(root);
        let mut reports = HashMap::new();
        reports.insert(request.info_path, info.to_string());
        reports.insert(request.dep_path, dep.to_string());
        Self { reports }
    }

    pub fn empty() -> Self {
        Self {
            reports: HashMap::new(),
        }
    }
}

impl ReportReader for MockReportReader {
    fn read_report(&self, path: &Path) -> Result<String> {
        match self.reports.get(path) {
            Some(content) => Ok(content.clone()),
            None => anyhow::bail!("Mock report not found: {}", path.display()),
        }
    }
}
