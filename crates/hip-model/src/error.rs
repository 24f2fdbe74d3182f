//! Model and prediction error types.

use std::path::PathBuf;

use hip_core::enums::Timepoint;
use hip_core::errors::CoreError;

/// Failures inside a loaded artifact pair or while reading one.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Artifact file could not be read.
    #[error("Failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact file is not a valid artifact document.
    #[error("Failed to decode artifact {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The preprocessor could not turn the record into a feature vector.
    #[error("Preprocessing failed: {0}")]
    Transform(String),

    /// Feature vector and model disagree on layout.
    #[error("Model shape mismatch: {0}")]
    Shape(String),

    /// The regressor produced NaN or infinity.
    #[error("Model produced a non-finite score: {0}")]
    NonFinite(f64),
}

/// Every way the trained path can fail. All variants are recoverable: the
/// orchestration policy falls back to the demo heuristic on any of them.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The timepoint text is neither `T3` nor `T5`.
    #[error("Invalid timepoint '{0}': expected 'T3' or 'T5'")]
    InvalidTimepoint(String),

    /// One or both artifact files are absent.
    #[error("Pre-trained {timepoint} model not found (missing: {})", display_paths(.missing))]
    ArtifactsMissing {
        timepoint: Timepoint,
        missing: Vec<PathBuf>,
    },

    /// The record lacks required features. Names every absent key.
    #[error("Missing required features: {}", .0.join(", "))]
    MissingFeatures(Vec<String>),

    /// Loading, preprocessing, or predicting failed.
    #[error("Prediction unavailable: {0}")]
    PredictionUnavailable(#[from] ModelError),
}

impl From<CoreError> for PredictError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidTimepoint(raw) => Self::InvalidTimepoint(raw),
            other @ CoreError::InvalidFeature { .. } => {
                Self::PredictionUnavailable(ModelError::Transform(other.to_string()))
            }
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
