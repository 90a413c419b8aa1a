//! Worked Example and Comparison Routes

use axum::Json;
use serde::Serialize;

use crate::fixtures::{
    STATE_COMPARISON, WORKED_EXAMPLES, BASELINE_ACRE_LOT, BASELINE_BATH, BASELINE_BED,
    BASELINE_HOUSE_SIZE,
};
use crate::routes::predict::ApiError;
use feature_codec::{encode, FEATURE_DIMENSION};

/// One worked example, inputs plus pinned output
#[derive(Debug, Serialize)]
pub struct ExampleEntry {
    pub bed: u32,
    pub bath: u32,
    pub acre_lot: f64,
    pub state: &'static str,
    pub house_size: f64,
    /// Feature vector the inputs encode to
    pub features: [f64; FEATURE_DIMENSION],
    /// Price pinned to the artifact the examples were computed against
    pub price: f64,
}

/// Response for the examples endpoint
#[derive(Debug, Serialize)]
pub struct ExamplesResponse {
    pub examples: Vec<ExampleEntry>,
}

/// One row of the state comparison table
#[derive(Debug, Serialize)]
pub struct ComparisonEntry {
    pub state: &'static str,
    pub price: f64,
}

/// Response for the comparison endpoint
#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub bed: u32,
    pub bath: u32,
    pub acre_lot: f64,
    pub house_size: f64,
    pub prices: Vec<ComparisonEntry>,
}

/// The two worked examples shipped with the artifact
pub async fn get_examples() -> Result<Json<ExamplesResponse>, ApiError> {
    let mut examples = Vec::with_capacity(WORKED_EXAMPLES.len());
    for example in WORKED_EXAMPLES {
        let vector = encode(
            BASELINE_BED,
            BASELINE_BATH,
            BASELINE_ACRE_LOT,
            example.state.name(),
            BASELINE_HOUSE_SIZE,
        )?;
        examples.push(ExampleEntry {
            bed: BASELINE_BED,
            bath: BASELINE_BATH,
            acre_lot: BASELINE_ACRE_LOT,
            state: example.state.name(),
            house_size: BASELINE_HOUSE_SIZE,
            features: *vector.values(),
            price: example.price,
        });
    }
    Ok(Json(ExamplesResponse { examples }))
}

/// Per-state prices at the baseline inputs, for charting
pub async fn get_comparison() -> Json<ComparisonResponse> {
    let prices = STATE_COMPARISON
        .iter()
        .map(|(state, price)| ComparisonEntry {
            state: state.name(),
            price: *price,
        })
        .collect();
    Json(ComparisonResponse {
        bed: BASELINE_BED,
        bath: BASELINE_BATH,
        acre_lot: BASELINE_ACRE_LOT,
        house_size: BASELINE_HOUSE_SIZE,
        prices,
    })
}
