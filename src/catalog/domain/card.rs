use serde::Serialize;
use serde_json::Value;

/// One entry in the search results grid.
///
/// Every field is resolved to a displayable value at construction time;
/// the invariant is that a renderer never has to handle a missing
/// field. The raw upstream fragment rides along for formatters that
/// want it (JSON output).
#[derive(Debug, Clone, Serialize)]
pub struct SearchResultCard {
    /// Opaque route token; feed it back to `blinker vehicle <id>`.
    pub id: String,
    pub year: String,
    pub make: String,
    pub model: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub price_per_month: u32,
    pub mpg: u32,
    pub drivetrain: String,
    pub state: String,
    pub image_url: String,
    pub raw: Value,
}
