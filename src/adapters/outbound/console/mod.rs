/// Console adapters writing diagnostics to stderr
mod stderr_diagnostics;

pub use stderr_diagnostics::{StderrDiagnostics, Verbosity};
