use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination where the formatted report
/// is presented.
pub trait OutputPresenter {
    /// Presents the formatted report content
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
