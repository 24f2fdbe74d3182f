//! Model-backed predictor.

use hip_core::catalog::{HEAD_SIZE, features_for};
use hip_core::enums::Timepoint;
use hip_core::record::{FeatureValue, PatientRecord};
use hip_core::score::PainScore;

use crate::error::PredictError;
use crate::store::ArtifactSource;

/// Predicts with the trained artifact pair for the requested timepoint.
#[derive(Debug, Clone)]
pub struct ModelPredictor<S> {
    source: S,
}

impl<S: ArtifactSource> ModelPredictor<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Load artifacts, check the record, preprocess, predict, clamp.
    ///
    /// # Errors
    ///
    /// - [`PredictError::ArtifactsMissing`] when either artifact file is absent
    /// - [`PredictError::MissingFeatures`] naming every absent required feature
    /// - [`PredictError::PredictionUnavailable`] for read, decode,
    ///   preprocessing, or model failures
    pub fn predict(
        &self,
        record: &PatientRecord,
        timepoint: Timepoint,
    ) -> Result<PainScore, PredictError> {
        let artifacts = self.source.load(timepoint)?;

        let missing = record.missing(features_for(timepoint));
        if !missing.is_empty() {
            return Err(PredictError::MissingFeatures(
                missing.into_iter().map(str::to_string).collect(),
            ));
        }

        let prepared = prepare(record);
        let raw = artifacts.score(&prepared)?;
        tracing::debug!(%timepoint, raw, "trained model scored record");
        Ok(PainScore::clamped(raw))
    }

    /// [`Self::predict`] with a textual timepoint.
    ///
    /// # Errors
    ///
    /// [`PredictError::InvalidTimepoint`] for anything but `T3`/`T5`, then as
    /// [`Self::predict`].
    pub fn predict_code(
        &self,
        record: &PatientRecord,
        timepoint: &str,
    ) -> Result<PainScore, PredictError> {
        let timepoint = timepoint.parse::<Timepoint>()?;
        self.predict(record, timepoint)
    }
}

/// The implant size was a string category at training time.
fn prepare(record: &PatientRecord) -> PatientRecord {
    let mut prepared = record.clone();
    if let Some(value) = prepared.get_mut(HEAD_SIZE) {
        *value = value.clone().into_text();
    }
    prepared
}
