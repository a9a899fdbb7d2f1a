use crate::dependency_model::domain::DependencyModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// CSV header line
const CSV_HEADER: &str =
    "Package name,Version,Release,Architecture,Repository,Summary,Dependency,Providers... (*) internal provider";

/// Placeholder for packages without (effective) dependencies
const NO_DEPENDENCY: &str = "---";

/// CsvFormatter adapter for the comma-delimited report
///
/// One line per (package, dependency) pair, providers appended as
/// `name,version,flag` triples. Fields are not quoted; commas inside the
/// summary are replaced by spaces.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, model: &DependencyModel, include_external: bool) -> Result<String> {
        let mut output = String::new();
        output.push_str(CSV_HEADER);
        output.push('\n');

        for key in model.package_keys() {
            let info = model.package(key)?;
            let package_line = format!(
                "{},{},{},{},{},{}",
                key,
                info.version,
                info.release,
                info.arch,
                info.repository,
                info.summary.replace(',', " ")
            );

            let dependencies = model.effective_dependency_list(key, include_external)?;
            if dependencies.is_empty() {
                output.push_str(&format!("{},{}\n", package_line, NO_DEPENDENCY));
                continue;
            }

            for dependency in dependencies {
                let mut line = format!("{},{}", package_line, dependency);
                for provider in model.provider_list(key, dependency)? {
                    let flag = if model.is_internal_package(provider.name()) {
                        "(*)"
                    } else {
                        ""
                    };
                    line.push_str(&format!(
                        ",{},{},{}",
                        provider.name(),
                        provider.version(),
                        flag
                    ));
                }
                output.push_str(&line);
                output.push('\n');
            }
        }

        Ok(output)
    }
}
