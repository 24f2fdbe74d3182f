//! Capability interface for trained artifacts.
//!
//! Prediction code only sees these two traits, never the on-disk format.

use hip_core::record::PatientRecord;

use crate::error::ModelError;

/// Turns a patient record into the numeric vector a regressor consumes.
pub trait Preprocessor {
    /// # Errors
    ///
    /// Returns [`ModelError::Transform`] when a column is absent or unusable.
    fn transform(&self, record: &PatientRecord) -> Result<Vec<f64>, ModelError>;
}

/// Maps a preprocessed feature vector to a raw (unclamped) score.
pub trait Regressor {
    /// # Errors
    ///
    /// Returns [`ModelError::Shape`] when the vector does not fit the model.
    fn predict(&self, features: &[f64]) -> Result<f64, ModelError>;
}

/// A trained regressor and the preprocessor it was fitted with.
pub struct ArtifactPair {
    pub preprocessor: Box<dyn Preprocessor>,
    pub regressor: Box<dyn Regressor>,
}

impl ArtifactPair {
    pub fn new(
        preprocessor: impl Preprocessor + 'static,
        regressor: impl Regressor + 'static,
    ) -> Self {
        Self {
            preprocessor: Box::new(preprocessor),
            regressor: Box::new(regressor),
        }
    }

    /// Preprocess then predict.
    ///
    /// # Errors
    ///
    /// Propagates failures from either half, and rejects non-finite output.
    pub fn score(&self, record: &PatientRecord) -> Result<f64, ModelError> {
        let features = self.preprocessor.transform(record)?;
        let raw = self.regressor.predict(&features)?;
        if raw.is_finite() {
            Ok(raw)
        } else {
            Err(ModelError::NonFinite(raw))
        }
    }
}

impl std::fmt::Debug for ArtifactPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactPair").finish_non_exhaustive()
    }
}
