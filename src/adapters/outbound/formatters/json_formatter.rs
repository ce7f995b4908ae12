use crate::application::dto::{DetailResponse, SearchResponse};
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;

/// JsonFormatter emits the response DTOs as pretty-printed JSON,
/// raw upstream fragments included, for piping into other tools.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for JsonFormatter {
    fn format_results(&self, response: &SearchResponse) -> Result<String> {
        let mut output = serde_json::to_string_pretty(response)?;
        output.push('\n');
        Ok(output)
    }

    fn format_detail(&self, response: &DetailResponse) -> Result<String> {
        let mut output = serde_json::to_string_pretty(response)?;
        output.push('\n');
        Ok(output)
    }
}
