//! Cross-cutting error types.
//!
//! Prediction errors (`PredictError`, `ModelError`) live in `hip-model`;
//! configuration errors live in `hip-config`. The binary converges all of
//! them through `anyhow`.

use thiserror::Error;

/// Errors raised while interpreting timepoints and feature input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The timepoint text is neither `T3` nor `T5`.
    #[error("Invalid timepoint '{0}': expected 'T3' or 'T5'")]
    InvalidTimepoint(String),

    /// A feature value could not be interpreted.
    #[error("Invalid value for feature '{name}': {reason}")]
    InvalidFeature { name: String, reason: String },
}
