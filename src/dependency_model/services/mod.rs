/// Report parsing services
mod dep_parser;
mod info_parser;
mod line_classifier;

pub use dep_parser::DepFileParser;
pub use info_parser::InfoFileParser;
pub use line_classifier::{classify_dep_line, classify_info_line, DepLine, InfoField, InfoLine};
