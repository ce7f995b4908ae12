use serde::Serialize;

use crate::catalog::domain::VehicleDetail;

/// DetailResponse - what the detail use case hands to a formatter.
#[derive(Debug, Clone, Serialize)]
pub struct DetailResponse {
    pub vehicle: VehicleDetail,
}
