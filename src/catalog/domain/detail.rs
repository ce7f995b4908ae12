use serde::Serialize;
use serde_json::Value;

/// The vehicle detail record: the card fields plus the trim-level data
/// only the detail endpoints return.
///
/// Same invariant as the card: every field already holds a displayable
/// value.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleDetail {
    pub id: String,
    pub year: String,
    pub make: String,
    pub model: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub trim: String,
    pub fuel: String,
    pub transmission: String,
    pub cylinders: String,
    pub price_per_month: u32,
    pub mpg: u32,
    pub drivetrain: String,
    pub state: String,
    pub image_url: String,
    pub raw: Value,
}

impl VehicleDetail {
    /// Hero title, e.g. `2018 Toyota Camry`.
    pub fn title(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}
