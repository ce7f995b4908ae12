use async_trait::async_trait;
use serde_json::Value;

use crate::shared::Result;

/// VehicleSource port for the upstream vehicle-data API.
///
/// The upstream API has been through several revisions and is not
/// consistent about field names (`make` vs `make_name`) or scalar
/// types (ids arrive as numbers or strings), so the records below are
/// probed out of the raw JSON rather than deserialized against a rigid
/// schema. Each record keeps its raw fragment.
///
/// # Async Support
/// All methods are async; implementations must be `Send + Sync` so the
/// caching decorator can wrap them.
#[async_trait]
pub trait VehicleSource: Send + Sync {
    /// All makes in the catalog.
    async fn list_makes(&self) -> Result<Vec<MakeRecord>>;

    /// Models under one make id.
    async fn models_for_make(&self, make_id: &str) -> Result<Vec<ModelRecord>>;

    /// Trim rows for a (make, model, optional year) tuple.
    async fn trims(&self, make: &str, model: &str, year: Option<&str>) -> Result<Vec<TrimRecord>>;

    /// The record behind one VIN, if upstream knows it.
    async fn lookup_vin(&self, vin: &str) -> Result<Option<TrimRecord>>;
}

/// One make as upstream reports it.
#[derive(Debug, Clone)]
pub struct MakeRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub raw: Value,
}

impl MakeRecord {
    pub fn from_value(value: Value) -> Self {
        Self {
            id: loose_string(&value, &["make_id", "id"]),
            name: loose_string(&value, &["make", "make_name", "name"]),
            raw: value,
        }
    }

    /// Display name, empty when upstream omitted it.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// One model row under a make.
#[derive(Debug, Clone)]
pub struct ModelRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub raw: Value,
}

impl ModelRecord {
    pub fn from_value(value: Value) -> Self {
        Self {
            id: loose_string(&value, &["model_id", "id"]),
            name: loose_string(&value, &["model", "model_name", "name"]),
            raw: value,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// One trim or VIN row. Carries every optional field the detail view
/// can use; whatever is absent falls back at mapping time.
#[derive(Debug, Clone, Default)]
pub struct TrimRecord {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub trim: Option<String>,
    pub vehicle_type: Option<String>,
    pub drivetrain: Option<String>,
    pub fuel: Option<String>,
    pub transmission: Option<String>,
    pub cylinders: Option<String>,
    pub mpg: Option<u32>,
    pub price_per_month: Option<u32>,
    pub image_url: Option<String>,
    pub raw: Value,
}

impl TrimRecord {
    pub fn from_value(value: Value) -> Self {
        Self {
            make: loose_string(&value, &["make", "make_name"]),
            model: loose_string(&value, &["model", "model_name", "make_model"]),
            year: loose_string(&value, &["year", "model_year"]),
            trim: loose_string(&value, &["trim", "description", "name"]),
            vehicle_type: loose_string(&value, &["type", "body_type", "vehicle_type"]),
            drivetrain: loose_string(&value, &["drivetrain", "drive", "drive_type"]),
            fuel: loose_string(&value, &["fuel", "fuel_type"]),
            transmission: loose_string(&value, &["transmission", "transmission_type"]),
            cylinders: loose_string(&value, &["cylinders", "engine_cylinders"]),
            mpg: loose_u32(&value, &["mpg", "combined_mpg", "mpg_combined"]),
            price_per_month: loose_u32(&value, &["price_per_month", "monthly_price"]),
            image_url: loose_string(&value, &["image_url", "image", "photo_url"]),
            raw: value,
        }
    }
}

/// Reads the first of `keys` present on `value`, accepting strings and
/// numbers interchangeably.
fn loose_string(value: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        match value.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => return Some(s.trim().to_string()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

fn loose_u32(value: &Value, keys: &[&str]) -> Option<u32> {
    for key in keys {
        match value.get(key) {
            Some(Value::Number(n)) => {
                if let Some(v) = n.as_u64() {
                    return u32::try_from(v).ok();
                }
            }
            Some(Value::String(s)) => {
                if let Ok(v) = s.trim().parse() {
                    return Some(v);
                }
            }
            _ => {}
        }
    }
    None
}
