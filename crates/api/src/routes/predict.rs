//! Prediction Route

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::AppState;
use feature_codec::{encode, EncodeError, FEATURE_DIMENSION};
use price_model::ModelError;

/// Form bounds carried over from the original input widgets
const BED_RANGE: (u32, u32) = (1, 5);
const BATH_RANGE: (u32, u32) = (1, 5);
const ACRE_LOT_RANGE: (f64, f64) = (0.1, 100.0);
const HOUSE_SIZE_RANGE: (f64, f64) = (100.0, 5000.0);

/// Request body for the predict endpoint
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// Number of bedrooms
    pub bed: u32,
    /// Number of bathrooms
    pub bath: u32,
    /// Lot size in acres
    pub acre_lot: f64,
    /// State name, as listed by the states endpoint
    pub state: String,
    /// House size
    pub house_size: f64,
}

/// Response for the predict endpoint
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Predicted price in dollars
    pub price: f64,
    /// The encoded feature vector fed to the model
    pub features: [f64; FEATURE_DIMENSION],
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors surfaced by the predict endpoint
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    OutOfBounds(String),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = match &self {
            ApiError::OutOfBounds(_) | ApiError::Encode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Model(ModelError::Unavailable) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (code, body).into_response()
    }
}

fn check_bounds(request: &PredictRequest) -> Result<(), ApiError> {
    fn bound<T: PartialOrd + std::fmt::Display>(
        field: &str,
        value: T,
        range: (T, T),
    ) -> Result<(), ApiError> {
        if value < range.0 || value > range.1 {
            Err(ApiError::OutOfBounds(format!(
                "{field} must be between {} and {}",
                range.0, range.1
            )))
        } else {
            Ok(())
        }
    }

    bound("bed", request.bed, BED_RANGE)?;
    bound("bath", request.bath, BATH_RANGE)?;
    bound("acre_lot", request.acre_lot, ACRE_LOT_RANGE)?;
    bound("house_size", request.house_size, HOUSE_SIZE_RANGE)?;
    Ok(())
}

/// Encode the request and run one inference
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    check_bounds(&request)?;

    let vector = encode(
        request.bed,
        request.bath,
        request.acre_lot,
        &request.state,
        request.house_size,
    )?;

    let price = state.predictor.predict(&vector).map_err(|err| {
        warn!(error = %err, "inference failed");
        err
    })?;

    Ok(Json(PredictResponse {
        price: price.amount,
        features: *vector.values(),
    }))
}
