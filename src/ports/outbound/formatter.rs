use crate::application::dto::{DetailResponse, SearchResponse};
use crate::shared::Result;

/// CatalogFormatter port for rendering command output.
///
/// Formatters turn the response DTOs into text; the CLI picks one based
/// on the `--format` flag.
pub trait CatalogFormatter {
    /// Renders a results grid.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format_results(&self, response: &SearchResponse) -> Result<String>;

    /// Renders a vehicle detail page.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format_detail(&self, response: &DetailResponse) -> Result<String>;
}
