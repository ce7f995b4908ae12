use crate::catalog::domain::{
    SearchResultCard, VehicleId, DEFAULT_MONTHLY_PRICE, DEFAULT_MPG, NOT_AVAILABLE,
};
use crate::ports::outbound::ModelRecord;

use super::placeholder_image_for;

/// Maps one model row into a search result card.
///
/// The makes/models endpoints return taxonomy only, so the card leans
/// on the documented fallbacks for price, mpg and drivetrain. The id
/// minted here is what `blinker vehicle` decodes later.
pub fn build_card(
    make: &str,
    model: &ModelRecord,
    state: &str,
    year: Option<&str>,
) -> SearchResultCard {
    let model_name = if model.name().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        model.name().to_string()
    };

    let id = VehicleId::encode_model_ref(make, &model_name, year);
    let state = state.trim();

    SearchResultCard {
        year: year.unwrap_or(NOT_AVAILABLE).to_string(),
        make: make.to_string(),
        model: model_name,
        vehicle_type: "Model".to_string(),
        price_per_month: DEFAULT_MONTHLY_PRICE,
        mpg: DEFAULT_MPG,
        drivetrain: NOT_AVAILABLE.to_string(),
        state: if state.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            state.to_uppercase()
        },
        image_url: placeholder_image_for(&id).to_string(),
        id,
        raw: model.raw.clone(),
    }
}
