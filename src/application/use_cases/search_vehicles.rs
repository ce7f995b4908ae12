use crate::application::dto::{SearchRequest, SearchResponse};
use crate::catalog::domain::{SearchResultCard, MAX_SEARCH_RESULTS};
use crate::catalog::services::{build_card, MakeMatcher};
use crate::ports::outbound::{ProgressReporter, VehicleSource};
use crate::shared::error::CatalogError;
use crate::shared::Result;

use super::fetch_spinner;

/// SearchVehiclesUseCase - the results-grid flow.
///
/// Normalizes the query, resolves it to one make, pulls that make's
/// models and maps the first six into result cards.
///
/// # Type Parameters
/// * `S` - VehicleSource implementation
/// * `PR` - ProgressReporter implementation
pub struct SearchVehiclesUseCase<S, PR> {
    source: S,
    progress_reporter: PR,
}

impl<S, PR> SearchVehiclesUseCase<S, PR>
where
    S: VehicleSource,
    PR: ProgressReporter,
{
    /// Creates a new SearchVehiclesUseCase with injected dependencies
    pub fn new(source: S, progress_reporter: PR) -> Self {
        Self {
            source,
            progress_reporter,
        }
    }

    /// Executes a catalog search.
    ///
    /// # Errors
    /// Fails when no make matches the query or an upstream call errors.
    pub async fn execute(&self, request: SearchRequest) -> Result<SearchResponse> {
        let normalized = request.normalized_query();

        // A blank query renders an empty grid without touching upstream.
        if normalized.is_empty() {
            return Ok(SearchResponse {
                title: request.title(),
                cards: Vec::new(),
            });
        }

        let spinner = fetch_spinner("Searching the catalog...");
        let outcome = self.fetch_cards(&request, &normalized).await;
        spinner.finish_and_clear();

        let cards = outcome?;
        self.progress_reporter.report(&format!(
            "✅ {} result(s) for \"{}\"",
            cards.len(),
            request.query.trim()
        ));

        Ok(SearchResponse {
            title: request.title(),
            cards,
        })
    }

    async fn fetch_cards(
        &self,
        request: &SearchRequest,
        normalized: &str,
    ) -> Result<Vec<SearchResultCard>> {
        let makes = self.source.list_makes().await?;

        let make = MakeMatcher::find(&makes, normalized).ok_or_else(|| {
            CatalogError::NoMatchingMake {
                query: request.query.trim().to_string(),
            }
        })?;
        let make_name = make.name().to_string();
        // Some API revisions omit numeric ids; the name works as the
        // lookup key there.
        let make_id = make.id.clone().unwrap_or_else(|| make_name.clone());

        let models = self.source.models_for_make(&make_id).await?;

        let year = request.clamped_year();
        Ok(models
            .iter()
            .take(MAX_SEARCH_RESULTS)
            .map(|model| build_card(&make_name, model, &request.state, year.as_deref()))
            .collect())
    }
}
