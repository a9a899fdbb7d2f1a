use crate::ports::outbound::OutputPresenter;
use crate::shared::Result;
use anyhow::Context;
use std::io::{self, Write};

/// StdoutPresenter adapter for writing the report to stdout
///
/// This adapter implements the OutputPresenter port; reports are never
/// written to files.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .context("Failed to write to stdout")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_presenter_success() {
        let presenter = StdoutPresenter::new();
        // We can't easily test stdout output, but we can verify it doesn't error
        let result = presenter.present("test output\n");
        assert!(result.is_ok());
    }
}
