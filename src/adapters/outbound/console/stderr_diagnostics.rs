use crate::ports::outbound::DiagnosticsSink;
use owo_colors::{OwoColorize, Stream::Stderr};

/// How much the console sink prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Failures only
    Quiet,
    /// Warnings and failures
    #[default]
    Normal,
    /// Debug traces, warnings and failures
    Verbose,
}

impl Verbosity {
    /// Resolves the `--quiet` / `--verbose` flags; quiet wins when both are set
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// StderrDiagnostics adapter for reporting diagnostics to stderr
///
/// This adapter implements the DiagnosticsSink port, writing to stderr so
/// nothing interferes with the report written to stdout. Colors are only used
/// when stderr is a terminal.
pub struct StderrDiagnostics {
    verbosity: Verbosity,
}

impl StderrDiagnostics {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }
}

impl Default for StderrDiagnostics {
    fn default() -> Self {
        Self::new(Verbosity::Normal)
    }
}

impl DiagnosticsSink for StderrDiagnostics {
    fn debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!(
                "{}",
                message.if_supports_color(Stderr, |text| text.dimmed())
            );
        }
    }

    fn warn(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!(
                "{} {}",
                "⚠️  Warning:".if_supports_color(Stderr, |text| text.yellow()),
                message
            );
        }
    }

    fn fail(&self, message: &str) {
        eprintln!(
            "{} {}",
            "❌ Error:".if_supports_color(Stderr, |text| text.red()),
            message
        );
    }
}
