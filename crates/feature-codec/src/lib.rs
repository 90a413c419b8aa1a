//! Feature Encoding
//!
//! Maps raw listing fields to the fixed-order feature vector the trained
//! regression model consumes.

mod encoder;
mod error;
mod state;

pub use encoder::{encode, FeatureVector, FEATURE_DIMENSION};
pub use error::EncodeError;
pub use state::StateCode;
