use crate::adapters::outbound::formatters::{CsvFormatter, TextFormatter, WikiFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for different formatter
/// implementations, following the Factory Pattern.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use yum_deps::application::dto::OutputFormat;
    /// use yum_deps::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Wiki);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Csv => Box::new(CsvFormatter::new()),
            OutputFormat::Wiki => Box::new(WikiFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use yum_deps::application::dto::OutputFormat;
    /// use yum_deps::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Csv);
    /// assert_eq!(message, "📝 Generating CSV output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Generating plain text output...",
            OutputFormat::Csv => "📝 Generating CSV output...",
            OutputFormat::Wiki => "📝 Generating wiki table output...",
        }
    }
}
