use crate::application::dto::ReportRequest;
use crate::dependency_model::domain::DependencyModel;
use crate::dependency_model::services::{DepFileParser, InfoFileParser};
use crate::ports::outbound::{DiagnosticsSink, ReportReader};
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;

/// BuildDependencyModelUseCase - loads both reports into one model
///
/// This use case orchestrates reading the `yum info` and `yum deplist`
/// captures and running both parsers over them, using generic dependency
/// injection for the infrastructure it needs.
///
/// # Type Parameters
/// * `R` - ReportReader implementation
/// * `D` - DiagnosticsSink implementation
pub struct BuildDependencyModelUseCase<R, D> {
    report_reader: R,
    diagnostics: D,
}

impl<R, D> BuildDependencyModelUseCase<R, D>
where
    R: ReportReader,
    D: DiagnosticsSink,
{
    /// Creates a new BuildDependencyModelUseCase with injected dependencies
    pub fn new(report_reader: R, diagnostics: D) -> Self {
        Self {
            report_reader,
            diagnostics,
        }
    }

    /// Executes the use case
    ///
    /// Both files are read before any parsing starts, so a missing
    /// dependency report is reported before the info report is processed.
    ///
    /// # Errors
    /// Returns an error if a report cannot be read or if the dependency
    /// report references a dependency that was never declared.
    pub fn execute(&self, request: &ReportRequest) -> Result<DependencyModel> {
        // Step 1: Read both reports
        let info_content = self.read_report(&request.info_path)?;
        let dep_content = self.read_report(&request.dep_path)?;

        let mut model = DependencyModel::new();

        // Step 2: Package information
        InfoFileParser::new(&self.diagnostics).parse_str(&info_content, &mut model);
        self.diagnostics
            .debug(&format!("✅ Loaded {} package(s)", model.package_count()));

        // Step 3: Dependencies and providers
        DepFileParser::new(&self.diagnostics)
            .parse_str(&dep_content, &mut model)
            .with_context(|| {
                format!(
                    "Failed to process dependency report: {}",
                    request.dep_path.display()
                )
            })?;
        self.diagnostics.debug("✅ Dependency report processed");

        // Step 4: Trace the loaded tree
        self.trace_model(&model)?;

        Ok(model)
    }

    /// Lists every internal package with its dependencies and providers,
    /// flagging each provider `yes` when it is an internal package and `no` otherwise
    fn trace_model(&self, model: &DependencyModel) -> Result<()> {
        for key in model.package_keys() {
            let info = model.package(key)?;
            self.diagnostics.debug(&format!(
                "Package {} [{}] [{}] [{}] [{}] [{}]",
                key, info.version, info.release, info.arch, info.repository, info.summary
            ));
            for dependency in model.dependency_list(key)? {
                self.diagnostics.debug(&format!("  {}", dependency));
                for provider in model.provider_list(key, dependency)? {
                    let flag = if model.is_internal_package(provider.name()) {
                        "yes"
                    } else {
                        "no"
                    };
                    self.diagnostics.debug(&format!(
                        "    [{}, {}] {}",
                        provider.name(),
                        provider.version(),
                        flag
                    ));
                }
            }
        }
        Ok(())
    }

    fn read_report(&self, path: &Path) -> Result<String> {
        self.diagnostics
            .debug(&format!("📖 Loading report from: {}", path.display()));
        self.report_reader.read_report(path)
    }
}
