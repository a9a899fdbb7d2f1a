use super::line_classifier::{classify_dep_line, DepLine};
use crate::dependency_model::domain::{
    DependencyModel, DiagnosticsSink, Insertion, LookupError, Provider, UNDEFINED,
};

/// DepFileParser service populating the model from a `yum deplist` capture
///
/// The report is flat: a `provider:` line belongs to the closest preceding
/// `dependency:` line, which belongs to the closest preceding `package:` line.
pub struct DepFileParser<D> {
    diagnostics: D,
}

impl<D: DiagnosticsSink> DepFileParser<D> {
    pub fn new(diagnostics: D) -> Self {
        Self { diagnostics }
    }

    /// Parses the whole report content into `model`
    pub fn parse_str(&self, content: &str, model: &mut DependencyModel) -> Result<(), LookupError> {
        self.parse(content.lines(), model)
    }

    /// Parses a sequence of report lines into `model`
    ///
    /// # Errors
    /// Returns a `LookupError` when a provider line appears before any
    /// dependency line of the current package.
    pub fn parse<'a, I>(&self, lines: I, model: &mut DependencyModel) -> Result<(), LookupError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut current_package = UNDEFINED;
        let mut current_dependency = UNDEFINED;

        for line in lines {
            match classify_dep_line(line) {
                Some(DepLine::Package { name, .. }) => {
                    self.diagnostics.debug(&format!("found package {}", name));
                    current_package = name;
                }
                Some(DepLine::Dependency { name }) => {
                    self.diagnostics
                        .debug(&format!("  found dependency {}", name));
                    if model.add_dependency(current_package, name) == Insertion::AlreadyPresent {
                        self.diagnostics.warn(&format!(
                            "dependency {} already exists for package {}",
                            name, current_package
                        ));
                    }
                    current_dependency = name;
                }
                Some(DepLine::Provider { name, version }) => {
                    let version = version.unwrap_or(UNDEFINED);
                    self.diagnostics.debug(&format!(
                        "    found provider {} {} {} {}",
                        current_package, current_dependency, name, version
                    ));
                    model.add_provider(
                        current_package,
                        current_dependency,
                        Provider::new(name, version),
                    )?;
                }
                None => {}
            }
        }

        Ok(())
    }
}
