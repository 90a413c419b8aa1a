//! Encoding Error Types

use thiserror::Error;

/// Errors during feature encoding
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    /// Field value outside the domain of the encoding transform
    #[error("{field} value {value} must be positive")]
    InvalidInput { field: &'static str, value: f64 },

    /// State name not in the fixed categorical table
    #[error("unknown state: {0}")]
    UnknownState(String),
}
