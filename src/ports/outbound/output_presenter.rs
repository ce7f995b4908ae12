use crate::shared::Result;

/// OutputPresenter port for delivering formatted command output.
///
/// Implementations decide where the rendered text goes (stdout, a
/// file); the use cases never write anywhere directly.
pub trait OutputPresenter {
    /// Presents the formatted content.
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written.
    fn present(&self, content: &str) -> Result<()>;
}
