/// Output format enumeration for report rendering
///
/// This enum belongs in the application layer: the CLI, the config file and
/// the formatter factory all need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented plain-text listing
    Text,
    /// Comma-delimited, one line per package/dependency pair
    Csv,
    /// MediaWiki table (default)
    #[default]
    Wiki,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "wiki" => Ok(OutputFormat::Wiki),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text', 'csv' or 'wiki'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Wiki => write!(f, "wiki"),
        }
    }
}
