use crate::catalog::domain::{
    VehicleDetail, VehicleId, DEFAULT_MONTHLY_PRICE, DEFAULT_MPG, NOT_AVAILABLE,
};
use crate::ports::outbound::TrimRecord;

use super::placeholder_image_for;

/// Maps the first upstream trim/VIN row into the detail view model.
///
/// Each field resolves in order: the upstream record, then whatever the
/// decoded id encodes, then the documented fallback. The detail page
/// has no state context, so that field is always `N/A` here.
pub fn build_detail(id: &str, decoded: &VehicleId, record: &TrimRecord) -> VehicleDetail {
    let (token_make, token_model, token_year) = match decoded {
        VehicleId::ModelRef { make, model, year } => {
            (Some(make.clone()), Some(model.clone()), year.clone())
        }
        VehicleId::Vin(_) => (None, None, None),
    };

    let na = || NOT_AVAILABLE.to_string();

    VehicleDetail {
        id: id.to_string(),
        year: record.year.clone().or(token_year).unwrap_or_else(na),
        make: record.make.clone().or(token_make).unwrap_or_else(na),
        model: record.model.clone().or(token_model).unwrap_or_else(na),
        vehicle_type: record.vehicle_type.clone().unwrap_or_else(|| "Model".to_string()),
        trim: record.trim.clone().unwrap_or_else(na),
        fuel: record.fuel.clone().unwrap_or_else(na),
        transmission: record.transmission.clone().unwrap_or_else(na),
        cylinders: record.cylinders.clone().unwrap_or_else(na),
        price_per_month: record.price_per_month.unwrap_or(DEFAULT_MONTHLY_PRICE),
        mpg: record.mpg.unwrap_or(DEFAULT_MPG),
        drivetrain: record.drivetrain.clone().unwrap_or_else(na),
        state: na(),
        image_url: record
            .image_url
            .clone()
            .unwrap_or_else(|| placeholder_image_for(id).to_string()),
        raw: record.raw.clone(),
    }
}
