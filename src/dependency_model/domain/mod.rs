/// Domain model for yum package reports
///
/// Pure data structures with no I/O: packages, their dependencies and the
/// providers satisfying each dependency.
mod dependency_model;
mod diagnostics;
mod lookup_error;
mod package;

pub use dependency_model::{DependencyModel, Insertion};
pub use diagnostics::DiagnosticsSink;
pub use lookup_error::LookupError;
pub use package::{package_key, PackageInfo, Provider, UNDEFINED};
