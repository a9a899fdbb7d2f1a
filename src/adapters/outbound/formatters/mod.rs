/// Formatter adapters for the different report formats
mod csv_formatter;
mod text_formatter;
mod wiki_formatter;

pub use csv_formatter::CsvFormatter;
pub use text_formatter::TextFormatter;
pub use wiki_formatter::WikiFormatter;
