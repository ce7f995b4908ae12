mod card;
mod detail;
mod vehicle_id;

pub use card::SearchResultCard;
pub use detail::VehicleDetail;
pub use vehicle_id::VehicleId;

/// Placeholder for any text field the upstream API left blank.
pub const NOT_AVAILABLE: &str = "N/A";
/// Monthly subscription price used when upstream has no pricing.
pub const DEFAULT_MONTHLY_PRICE: u32 = 799;
/// Combined mpg used when upstream has no economy figures.
pub const DEFAULT_MPG: u32 = 25;
/// A search renders at most one grid of six cards.
pub const MAX_SEARCH_RESULTS: usize = 6;
