/// Sink for parser and use-case diagnostics
///
/// Report parsers write to it directly; `ports::outbound` re-exports it as the
/// driven port implemented by the console adapter.
pub trait DiagnosticsSink {
    /// Reports a trace message (recognized fields, progress)
    ///
    /// # Arguments
    /// * `message` - The debug message
    fn debug(&self, message: &str);

    /// Reports a recoverable problem, e.g. a duplicate definition
    ///
    /// # Arguments
    /// * `message` - The warning message
    fn warn(&self, message: &str);

    /// Reports a fatal error that ends the run
    ///
    /// # Arguments
    /// * `message` - The error message
    fn fail(&self, message: &str);
}

impl<T: DiagnosticsSink + ?Sized> DiagnosticsSink for &T {
    fn debug(&self, message: &str) {
        (**self).debug(message)
    }

    fn warn(&self, message: &str) {
        (**self).warn(message)
    }

    fn fail(&self, message: &str) {
        (**self).fail(message)
    }
}
