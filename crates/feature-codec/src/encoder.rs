//! Feature Vector Assembly

use crate::error::EncodeError;
use crate::state::StateCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of features the trained model expects
pub const FEATURE_DIMENSION: usize = 5;

/// Feature vector for regression inference.
///
/// Field order is part of the trained model's input contract:
/// `[bed, bath, ln(acre_lot), state_code, ln(house_size)]`. The order and
/// the log transforms are not self-describing and must stay in sync with
/// the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_DIMENSION]);

impl FeatureVector {
    /// Raw feature values in model input order
    pub fn values(&self) -> &[f64; FEATURE_DIMENSION] {
        &self.0
    }

    /// Feature values as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Encode raw listing fields into the model's feature vector.
///
/// Pure transform: natural log on the two continuous fields, categorical
/// integer for the state, no rounding. Fails with [`EncodeError::InvalidInput`]
/// when a field falls outside the log domain and [`EncodeError::UnknownState`]
/// for a state name missing from the fixed table.
pub fn encode(
    bed: u32,
    bath: u32,
    acre_lot: f64,
    state_name: &str,
    house_size: f64,
) -> Result<FeatureVector, EncodeError> {
    if bed < 1 {
        return Err(EncodeError::InvalidInput {
            field: "bed",
            value: bed as f64,
        });
    }
    if bath < 1 {
        return Err(EncodeError::InvalidInput {
            field: "bath",
            value: bath as f64,
        });
    }
    if acre_lot <= 0.0 {
        return Err(EncodeError::InvalidInput {
            field: "acre_lot",
            value: acre_lot,
        });
    }
    if house_size <= 0.0 {
        return Err(EncodeError::InvalidInput {
            field: "house_size",
            value: house_size,
        });
    }

    let state = StateCode::from_name(state_name)
        .ok_or_else(|| EncodeError::UnknownState(state_name.to_string()))?;

    let features = [
        bed as f64,
        bath as f64,
        acre_lot.ln(),
        state.code() as f64,
        house_size.ln(),
    ];
    debug!(?features, %state, "encoded feature vector");

    Ok(FeatureVector(features))
}
