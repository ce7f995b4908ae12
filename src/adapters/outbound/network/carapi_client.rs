use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::config::{Config, ENV_API_HOST, ENV_API_KEY};
use crate::ports::outbound::{MakeRecord, ModelRecord, TrimRecord, VehicleSource};
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// Minimum spacing between outbound calls. The upstream API
/// rate-limits aggressively on the free tier; spacing requests keeps
/// multi-call flows (makes then models) under the limit.
const MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(300);
/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// How much of an upstream body ends up in error messages.
const ERROR_SNIPPET_CHARS: usize = 120;

/// CarApiVehicleSource adapter for the third-party vehicle-data API.
///
/// Builds authenticated requests (the RapidAPI header pair travels on
/// every call), throttles outbound traffic, and probes the
/// loosely-shaped JSON payloads into the typed records the port
/// promises.
#[derive(Debug)]
pub struct CarApiVehicleSource {
    client: reqwest::Client,
    base_url: String,
    last_request: Mutex<Option<Instant>>,
}

impl CarApiVehicleSource {
    /// Creates a client from validated configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("blinker/{}", version);

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "x-rapidapi-key",
            config
                .api_key
                .parse()
                .map_err(|_| CatalogError::InvalidConfig {
                    name: ENV_API_KEY.to_string(),
                    reason: "not a valid header value".to_string(),
                })?,
        );
        headers.insert(
            "x-rapidapi-host",
            config
                .api_host
                .parse()
                .map_err(|_| CatalogError::InvalidConfig {
                    name: ENV_API_HOST.to_string(),
                    reason: "not a valid header value".to_string(),
                })?,
        );

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            last_request: Mutex::new(None),
        })
    }

    /// Waits out the minimum spacing since the previous request.
    async fn throttle(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < MIN_REQUEST_INTERVAL {
                tokio::time::sleep(MIN_REQUEST_INTERVAL - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }

    /// Shared request helper: throttled, authenticated GET that only
    /// ever returns parsed JSON.
    async fn fetch_json(&self, path_and_query: &str) -> Result<Value> {
        self.throttle().await;

        let url = format!("{}{}", self.base_url, path_and_query);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.text().await?;

        if !content_type.contains("application/json") {
            return Err(CatalogError::NonJsonResponse {
                url,
                status: status.as_u16(),
                snippet: snippet(&body),
            }
            .into());
        }

        let payload: Value =
            serde_json::from_str(&body).map_err(|_| CatalogError::NonJsonResponse {
                url: url.clone(),
                status: status.as_u16(),
                snippet: snippet(&body),
            })?;

        if !status.is_success() {
            return Err(CatalogError::UpstreamStatus {
                url,
                status: status.as_u16(),
                snippet: snippet(&body),
            }
            .into());
        }

        Ok(payload)
    }
}

#[async_trait]
impl VehicleSource for CarApiVehicleSource {
    async fn list_makes(&self) -> Result<Vec<MakeRecord>> {
        let payload = self.fetch_json("/api/makes").await?;
        Ok(data_items(payload)
            .into_iter()
            .map(MakeRecord::from_value)
            .collect())
    }

    async fn models_for_make(&self, make_id: &str) -> Result<Vec<ModelRecord>> {
        let path = format!("/api/models?make_id={}", urlencoding::encode(make_id));
        let payload = self.fetch_json(&path).await?;
        Ok(data_items(payload)
            .into_iter()
            .map(ModelRecord::from_value)
            .collect())
    }

    async fn trims(&self, make: &str, model: &str, year: Option<&str>) -> Result<Vec<TrimRecord>> {
        let mut path = format!(
            "/api/trims?make={}&model={}",
            urlencoding::encode(make),
            urlencoding::encode(model)
        );
        if let Some(year) = year {
            path.push_str(&format!("&year={}", urlencoding::encode(year)));
        }

        let payload = self.fetch_json(&path).await?;
        Ok(data_items(payload)
            .into_iter()
            .map(TrimRecord::from_value)
            .collect())
    }

    async fn lookup_vin(&self, vin: &str) -> Result<Option<TrimRecord>> {
        let path = format!("/api/vin/{}", urlencoding::encode(vin));
        let payload = self.fetch_json(&path).await?;
        Ok(single_record(payload).map(TrimRecord::from_value))
    }
}

/// First characters of an upstream body, for error messages.
fn snippet(body: &str) -> String {
    body.chars().take(ERROR_SNIPPET_CHARS).collect()
}

/// List payloads arrive as `{"data": [...]}` in some API revisions and
/// as a bare array in others.
fn data_items(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            Some(other @ Value::Object(_)) => vec![other],
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// VIN lookups answer with one object: bare, under `data`, or as a
/// single-element array. Empty objects count as "not found".
fn single_record(payload: Value) -> Option<Value> {
    let candidate = match payload {
        Value::Object(mut map) => match map.remove("data") {
            Some(inner) => single_record(inner)?,
            None => Value::Object(map),
        },
        Value::Array(items) => items.into_iter().next()?,
        _ => return None,
    };

    match &candidate {
        Value::Object(map) if !map.is_empty() => Some(candidate),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> Config {
        Config {
            base_url: "https://carapi.example.com".to_string(),
            api_key: "test-key".to_string(),
            api_host: "carapi.example.com".to_string(),
        }
    }

    #[test]
    fn test_client_creation() {
        assert!(CarApiVehicleSource::new(&config()).is_ok());
    }

    #[test]
    fn test_client_rejects_unprintable_api_key() {
        let mut bad = config();
        bad.api_key = "line\nbreak".to_string();
        let err = format!("{}", CarApiVehicleSource::new(&bad).unwrap_err());
        assert!(err.contains(ENV_API_KEY));
    }

    #[test]
    fn test_data_items_enveloped() {
        let items = data_items(json!({"data": [{"make": "Toyota"}, {"make": "Honda"}]}));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_data_items_bare_array() {
        let items = data_items(json!([{"make": "Toyota"}]));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_data_items_missing_data_key() {
        assert!(data_items(json!({"message": "rate limited"})).is_empty());
    }

    #[test]
    fn test_single_record_bare_object() {
        let record = single_record(json!({"vin": "X", "make": "Honda"})).unwrap();
        assert_eq!(record["make"], "Honda");
    }

    #[test]
    fn test_single_record_under_data() {
        let record = single_record(json!({"data": {"make": "Honda"}})).unwrap();
        assert_eq!(record["make"], "Honda");
    }

    #[test]
    fn test_single_record_array_takes_first() {
        let record = single_record(json!({"data": [{"make": "A"}, {"make": "B"}]})).unwrap();
        assert_eq!(record["make"], "A");
    }

    #[test]
    fn test_single_record_empty_cases() {
        assert!(single_record(json!({})).is_none());
        assert!(single_record(json!({"data": []})).is_none());
        assert!(single_record(json!({"data": {}})).is_none());
        assert!(single_record(json!(null)).is_none());
    }

    #[test]
    fn test_snippet_truncates() {
        let long = "x".repeat(500);
        assert_eq!(snippet(&long).len(), ERROR_SNIPPET_CHARS);
    }
}
