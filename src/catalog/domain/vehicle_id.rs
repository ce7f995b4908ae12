use crate::shared::error::CatalogError;
use crate::shared::Result;

use super::NOT_AVAILABLE;

/// Separator inside a (make, model, year) route token.
const TOKEN_SEPARATOR: char = '~';
/// VINs are exactly 17 characters.
const VIN_LENGTH: usize = 17;

/// Decoded form of the opaque id a search card carries.
///
/// Two encodings exist: a bare 17-character VIN, or a
/// `make~model~year` token minted when the card is built. The year slot
/// holds `N/A` when the search had no year to offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehicleId {
    Vin(String),
    ModelRef {
        make: String,
        model: String,
        year: Option<String>,
    },
}

impl VehicleId {
    /// Mints the route token a search card carries.
    pub fn encode_model_ref(make: &str, model: &str, year: Option<&str>) -> String {
        format!(
            "{make}{TOKEN_SEPARATOR}{model}{TOKEN_SEPARATOR}{}",
            year.unwrap_or(NOT_AVAILABLE)
        )
    }

    /// Decodes a route token or VIN.
    ///
    /// Malformed ids fail here, before any network traffic happens on
    /// their behalf.
    pub fn decode(id: &str) -> Result<Self> {
        let trimmed = id.trim();

        if trimmed.is_empty() {
            return Err(malformed(id, "empty id"));
        }

        if trimmed.contains(TOKEN_SEPARATOR) {
            return Self::decode_token(id, trimmed);
        }

        if is_vin(trimmed) {
            return Ok(VehicleId::Vin(trimmed.to_ascii_uppercase()));
        }

        Err(malformed(id, "not a VIN and not a make~model~year token"))
    }

    fn decode_token(original: &str, trimmed: &str) -> Result<Self> {
        let parts: Vec<&str> = trimmed.split(TOKEN_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(malformed(original, "expected make~model~year"));
        }

        let make = parts[0].trim();
        let model = parts[1].trim();
        let year = parts[2].trim();

        if make.is_empty() || model.is_empty() {
            return Err(malformed(original, "make and model must be non-empty"));
        }

        let year = if year.is_empty() || year.eq_ignore_ascii_case(NOT_AVAILABLE) {
            None
        } else if year.chars().all(|c| c.is_ascii_digit()) {
            Some(year.to_string())
        } else {
            return Err(malformed(original, "year must be numeric or N/A"));
        };

        Ok(VehicleId::ModelRef {
            make: make.to_string(),
            model: model.to_string(),
            year,
        })
    }
}

fn malformed(id: &str, reason: &str) -> anyhow::Error {
    CatalogError::MalformedVehicleId {
        id: id.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// VINs draw from the alphanumerics minus I, O and Q.
fn is_vin(candidate: &str) -> bool {
    candidate.len() == VIN_LENGTH
        && candidate.chars().all(|c| {
            let c = c.to_ascii_uppercase();
            c.is_ascii_digit() || (c.is_ascii_uppercase() && !matches!(c, 'I' | 'O' | 'Q'))
        })
}
