//! Price Inference
//!
//! Loads a trained regression artifact and turns feature vectors into
//! dollar-amount predictions.

mod forest;
mod predictor;

pub use forest::{ForestArtifact, RandomForest};
pub use predictor::{PredictedPrice, Predictor, RegressionModel};

use thiserror::Error;

/// Errors during model loading and inference
#[derive(Debug, Error)]
pub enum ModelError {
    /// No model capability was initialized before predict was called
    #[error("model unavailable: no regression model loaded")]
    Unavailable,

    /// Artifact file could not be read
    #[error("failed to read model artifact: {0}")]
    ArtifactIo(#[from] std::io::Error),

    /// Artifact file could not be decoded
    #[error("failed to decode model artifact: {0}")]
    ArtifactDecode(#[from] serde_json::Error),

    /// Artifact contents are internally inconsistent
    #[error("malformed model artifact: {0}")]
    MalformedArtifact(String),

    /// Artifact expects a different feature dimension than this encoder produces
    #[error("feature dimension mismatch: artifact expects {expected}, encoder produces {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
