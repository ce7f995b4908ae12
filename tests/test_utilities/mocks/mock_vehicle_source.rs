use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use blinker::prelude::*;

/// Mock VehicleSource with canned catalog data and call counting.
///
/// Use cases take ownership of their source, so tests grab the shared
/// call counter before handing the mock over.
pub struct MockVehicleSource {
    makes: Vec<MakeRecord>,
    models: Vec<ModelRecord>,
    trims: Vec<TrimRecord>,
    vin_record: Option<TrimRecord>,
    should_fail: bool,
    calls: Arc<AtomicUsize>,
}

impl MockVehicleSource {
    pub fn new() -> Self {
        Self {
            makes: Vec::new(),
            models: Vec::new(),
            trims: Vec::new(),
            vin_record: None,
            should_fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_make(mut self, id: u32, name: &str) -> Self {
        self.makes
            .push(MakeRecord::from_value(json!({"make_id": id, "make": name})));
        self
    }

    pub fn with_models(mut self, names: &[&str]) -> Self {
        for (i, name) in names.iter().enumerate() {
            self.models.push(ModelRecord::from_value(
                json!({"model_id": i + 1, "model": name}),
            ));
        }
        self
    }

    pub fn with_trim(mut self, value: Value) -> Self {
        self.trims.push(TrimRecord::from_value(value));
        self
    }

    pub fn with_vin_record(mut self, value: Value) -> Self {
        self.vin_record = Some(TrimRecord::from_value(value));
        self
    }

    pub fn with_failure() -> Self {
        let mut mock = Self::new();
        mock.should_fail = true;
        mock
    }

    /// Shared handle to the upstream call counter.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    fn record_call(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock vehicle source failure");
        }
        Ok(())
    }
}

impl Default for MockVehicleSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VehicleSource for MockVehicleSource {
    async fn list_makes(&self) -> Result<Vec<MakeRecord>> {
        self.record_call()?;
        Ok(self.makes.clone())
    }

    async fn models_for_make(&self, _make_id: &str) -> Result<Vec<ModelRecord>> {
        self.record_call()?;
        Ok(self.models.clone())
    }

    async fn trims(
        &self,
        _make: &str,
        _model: &str,
        _year: Option<&str>,
    ) -> Result<Vec<TrimRecord>> {
        self.record_call()?;
        Ok(self.trims.clone())
    }

    async fn lookup_vin(&self, _vin: &str) -> Result<Option<TrimRecord>> {
        self.record_call()?;
        Ok(self.vin_record.clone())
    }
}
