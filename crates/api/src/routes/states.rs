//! State Table Route

use axum::Json;
use serde::Serialize;

use feature_codec::StateCode;

/// One row of the categorical state table
#[derive(Debug, Serialize)]
pub struct StateEntry {
    pub name: &'static str,
    pub code: u8,
}

/// Response for the states endpoint
#[derive(Debug, Serialize)]
pub struct StatesResponse {
    pub states: Vec<StateEntry>,
}

/// List the fixed state table the model was trained with
pub async fn get_states() -> Json<StatesResponse> {
    let states = StateCode::ALL
        .iter()
        .map(|state| StateEntry {
            name: state.name(),
            code: state.code(),
        })
        .collect();
    Json(StatesResponse { states })
}
