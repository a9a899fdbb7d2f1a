use crate::dependency_model::domain::DependencyModel;
use crate::shared::Result;

/// ReportFormatter port for rendering the dependency model
///
/// This port abstracts the rendering logic for the different report formats
/// (plain text, CSV, wiki table).
pub trait ReportFormatter {
    /// Formats the whole model
    ///
    /// # Arguments
    /// * `model` - The populated dependency model
    /// * `include_external` - Whether dependencies without an internal provider are shown
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if the model is queried with an unknown key
    fn format(&self, model: &DependencyModel, include_external: bool) -> Result<String>;
}
