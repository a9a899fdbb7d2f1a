use crate::dependency_model::domain::DependencyModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Marker appended to providers that are internal packages
const INTERNAL_MARKER: &str = "internal";

/// TextFormatter adapter for the indented plain-text listing
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, model: &DependencyModel, include_external: bool) -> Result<String> {
        let mut output = String::new();

        for key in model.package_keys() {
            let info = model.package(key)?;
            writeln!(
                output,
                "Package {} [{}] [{}] [{}] [{}] [{}]",
                key, info.version, info.release, info.arch, info.repository, info.summary
            )?;

            for dependency in model.effective_dependency_list(key, include_external)? {
                writeln!(output, "  {}", dependency)?;
                for provider in model.provider_list(key, dependency)? {
                    let flag = if model.is_internal_package(provider.name()) {
                        format!(" {}", INTERNAL_MARKER)
                    } else {
                        String::new()
                    };
                    writeln!(
                        output,
                        "    [{}, {}]{}",
                        provider.name(),
                        provider.version(),
                        flag
                    )?;
                }
            }
        }

        Ok(output)
    }
}
