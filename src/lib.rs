//! yum-deps - dependency reports for yum package sets
//!
//! This library reads two captured reports, one produced with `yum info` and
//! one with `yum deplist`, builds an in-memory model of the packages, their
//! dependencies and the providers of each dependency, and renders that model
//! as plain text, CSV or a MediaWiki table.
//!
//! # Architecture
//!
//! - **Domain Layer** (`dependency_model`): the package tree, its queries and the report parsers
//! - **Application Layer** (`application`): use case, DTOs and the formatter factory
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): console, filesystem and formatter implementations
//! - **Shared** (`shared`): common error types
//!
//! # Example
//!
//! ```no_run
//! use yum_deps::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let diagnostics = StderrDiagnostics::new(Verbosity::Normal);
//! let use_case = BuildDependencyModelUseCase::new(FileSystemReader::new(), &diagnostics);
//!
//! let model = use_case.execute(&ReportRequest::from_input_root("pkg"))?;
//!
//! let formatter = FormatterFactory::create(OutputFormat::Text);
//! print!("{}", formatter.format(&model, true)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_model;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrDiagnostics, Verbosity};
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{CsvFormatter, TextFormatter, WikiFormatter};
    pub use crate::application::dto::{OutputFormat, ReportRequest, DEFAULT_INPUT_ROOT};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::BuildDependencyModelUseCase;
    pub use crate::config::{discover_config, load_config_from_path, ConfigFile};
    pub use crate::dependency_model::domain::{
        package_key, DependencyModel, Insertion, LookupError, PackageInfo, Provider, UNDEFINED,
    };
    pub use crate::dependency_model::services::{DepFileParser, InfoFileParser};
    pub use crate::ports::outbound::{
        DiagnosticsSink, OutputPresenter, ReportFormatter, ReportReader,
    };
    pub use crate::shared::error::{ExitCode, YumDepsError};
    pub use crate::shared::Result;
}
