use crate::application::dto::DetailResponse;
use crate::catalog::domain::VehicleId;
use crate::catalog::services::build_detail;
use crate::ports::outbound::{ProgressReporter, TrimRecord, VehicleSource};
use crate::shared::error::CatalogError;
use crate::shared::Result;

use super::fetch_spinner;

/// GetVehicleDetailUseCase - the detail-page flow.
///
/// Decodes the opaque id, resolves it through the VIN or trims
/// endpoint, and maps the first record into the detail view model.
///
/// # Type Parameters
/// * `S` - VehicleSource implementation
/// * `PR` - ProgressReporter implementation
pub struct GetVehicleDetailUseCase<S, PR> {
    source: S,
    progress_reporter: PR,
}

impl<S, PR> GetVehicleDetailUseCase<S, PR>
where
    S: VehicleSource,
    PR: ProgressReporter,
{
    /// Creates a new GetVehicleDetailUseCase with injected dependencies
    pub fn new(source: S, progress_reporter: PR) -> Self {
        Self {
            source,
            progress_reporter,
        }
    }

    /// Loads the detail record behind one vehicle id.
    ///
    /// # Errors
    /// Fails when the id is malformed (before any network call), when
    /// upstream errors, or when nothing matches the id.
    pub async fn execute(&self, id: &str) -> Result<DetailResponse> {
        let decoded = VehicleId::decode(id)?;

        let spinner = fetch_spinner("Loading vehicle...");
        let outcome = self.fetch_record(&decoded).await;
        spinner.finish_and_clear();

        let record = outcome?.ok_or_else(|| CatalogError::VehicleNotFound {
            id: id.trim().to_string(),
        })?;

        let vehicle = build_detail(id.trim(), &decoded, &record);
        self.progress_reporter
            .report(&format!("✅ Loaded {}", vehicle.title()));

        Ok(DetailResponse { vehicle })
    }

    async fn fetch_record(&self, decoded: &VehicleId) -> Result<Option<TrimRecord>> {
        match decoded {
            VehicleId::Vin(vin) => self.source.lookup_vin(vin).await,
            VehicleId::ModelRef { make, model, year } => {
                let trims = self.source.trims(make, model, year.as_deref()).await?;
                Ok(trims.into_iter().next())
            }
        }
    }
}
