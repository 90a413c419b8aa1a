//! Predictor Implementation

use crate::ModelError;
use feature_codec::FeatureVector;
use std::sync::Arc;
use tracing::debug;

/// The single capability this layer needs from a trained model.
///
/// Implementations must be safe for concurrent read-only use; the model is
/// loaded once and never mutated afterwards.
pub trait RegressionModel: Send + Sync {
    /// Evaluate the model on one feature vector, returning the raw
    /// (log-scale) output
    fn regress(&self, features: &FeatureVector) -> Result<f64, ModelError>;
}

/// A predicted house price in dollars
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictedPrice {
    /// Non-negative currency amount
    pub amount: f64,
}

/// Applies the inverse output transform around an injected regression model.
///
/// The model was trained against log-prices, so the raw output is
/// exponentiated before being returned.
pub struct Predictor {
    model: Option<Arc<dyn RegressionModel>>,
}

impl Predictor {
    /// Create a predictor around a loaded model
    pub fn new(model: Arc<dyn RegressionModel>) -> Self {
        Self { model: Some(model) }
    }

    /// Create a predictor with no model; every predict call fails with
    /// [`ModelError::Unavailable`]
    pub fn uninitialized() -> Self {
        Self { model: None }
    }

    /// Whether a model capability was initialized
    pub fn is_ready(&self) -> bool {
        self.model.is_some()
    }

    /// Run one inference and back-transform the output into a price
    pub fn predict(&self, features: &FeatureVector) -> Result<PredictedPrice, ModelError> {
        let model = self.model.as_ref().ok_or(ModelError::Unavailable)?;
        let raw = model.regress(features)?;
        let amount = raw.exp();
        debug!(raw, amount, "prediction complete");
        Ok(PredictedPrice { amount })
    }
}
