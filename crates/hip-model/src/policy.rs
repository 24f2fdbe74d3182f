//! Choose between the trained model and the demo heuristic.
//!
//! ```text
//! mode = demo                   → heuristic, source demo
//! mode = trained, model fails   → heuristic, source demo, notice = failure
//! mode = trained, model ok      → model score, source trained
//! ```

use hip_core::enums::{Mode, PredictionSource, Timepoint};
use hip_core::record::PatientRecord;
use hip_core::responses::Prediction;

use crate::heuristic::predict_demo;
use crate::predictor::ModelPredictor;
use crate::store::ArtifactSource;

pub const DEMO_NOTICE: &str =
    "Pre-trained models not found. Using demo mode: predictions are approximate and not based on trained models";

/// Stateless predict-or-fallback policy over an artifact source.
#[derive(Debug, Clone)]
pub struct PredictionPolicy<S> {
    predictor: ModelPredictor<S>,
}

impl<S: ArtifactSource> PredictionPolicy<S> {
    pub const fn new(source: S) -> Self {
        Self {
            predictor: ModelPredictor::new(source),
        }
    }

    /// Mode implied by the artifacts currently on disk.
    pub fn detect_mode(&self) -> Mode {
        self.predictor.source().mode()
    }

    /// Always produces a prediction; the trained path is attempted only in
    /// [`Mode::Trained`].
    pub fn predict(&self, record: &PatientRecord, timepoint: Timepoint, mode: Mode) -> Prediction {
        match mode {
            Mode::Demo => Self::demo(record, timepoint).with_notice(DEMO_NOTICE),
            Mode::Trained => match self.predictor.predict(record, timepoint) {
                Ok(score) => Prediction::new(timepoint, score, PredictionSource::Trained),
                Err(error) => {
                    tracing::warn!(
                        %timepoint,
                        %error,
                        "trained model unavailable; falling back to demo mode"
                    );
                    Self::demo(record, timepoint).with_notice(format!(
                        "Error using trained model: {error}. Falling back to demo mode."
                    ))
                }
            },
        }
    }

    fn demo(record: &PatientRecord, timepoint: Timepoint) -> Prediction {
        Prediction::new(timepoint, predict_demo(record, timepoint), PredictionSource::Demo)
    }
}

#[cfg(test)]
mod tests {
    use hip_core::catalog::features_for;
    use hip_core::score::PainScore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::artifact::{ArtifactPair, Preprocessor, Regressor};
    use crate::error::{ModelError, PredictError};

    struct Passthrough;

    impl Preprocessor for Passthrough {
        fn transform(&self, _record: &PatientRecord) -> Result<Vec<f64>, ModelError> {
            Ok(Vec::new())
        }
    }

    struct Constant(f64);

    impl Regressor for Constant {
        fn predict(&self, _features: &[f64]) -> Result<f64, ModelError> {
            Ok(self.0)
        }
    }

    struct Broken;

    impl Preprocessor for Broken {
        fn transform(&self, _record: &PatientRecord) -> Result<Vec<f64>, ModelError> {
            Err(ModelError::Transform("unknown category encoding".into()))
        }
    }

    enum Fake {
        Constant(f64),
        BrokenPreprocessor,
        Absent,
    }

    impl ArtifactSource for Fake {
        fn load(&self, timepoint: Timepoint) -> Result<ArtifactPair, PredictError> {
            match self {
                Self::Constant(raw) => Ok(ArtifactPair::new(Passthrough, Constant(*raw))),
                Self::BrokenPreprocessor => Ok(ArtifactPair::new(Broken, Constant(1.0))),
                Self::Absent => Err(PredictError::ArtifactsMissing {
                    timepoint,
                    missing: Vec::new(),
                }),
            }
        }

        fn mode(&self) -> Mode {
            match self {
                Self::Absent => Mode::Demo,
                _ => Mode::Trained,
            }
        }
    }

    fn complete(timepoint: Timepoint) -> PatientRecord {
        features_for(timepoint)
            .iter()
            .map(|name| (*name, 2.0))
            .collect()
    }

    #[test]
    fn trained_path_flags_trained() {
        let policy = PredictionPolicy::new(Fake::Constant(1.25));
        let out = policy.predict(&complete(Timepoint::T3), Timepoint::T3, Mode::Trained);

        assert_eq!(out.source, PredictionSource::Trained);
        assert_eq!(out.score, PainScore::clamped(1.25));
        assert_eq!(out.notice, None);
    }

    #[test]
    fn demo_mode_never_touches_model() {
        let policy = PredictionPolicy::new(Fake::Constant(7.0));
        let record = complete(Timepoint::T5);
        let out = policy.predict(&record, Timepoint::T5, Mode::Demo);

        assert!(out.is_demo());
        assert_eq!(out.score, predict_demo(&record, Timepoint::T5));
        assert_eq!(out.notice.as_deref(), Some(DEMO_NOTICE));
    }

    #[test]
    fn model_failure_falls_back_with_reason() {
        let policy = PredictionPolicy::new(Fake::BrokenPreprocessor);
        let record = complete(Timepoint::T3);
        let out = policy.predict(&record, Timepoint::T3, Mode::Trained);

        assert!(out.is_demo());
        assert_eq!(out.score, predict_demo(&record, Timepoint::T3));
        assert!(
            out.notice
                .as_deref()
                .is_some_and(|notice| notice.contains("unknown category encoding"))
        );
    }

    #[test]
    fn missing_features_fall_back_with_names() {
        let policy = PredictionPolicy::new(Fake::Constant(1.0));
        let record = PatientRecord::new().with("AgePreOp", 70);
        let out = policy.predict(&record, Timepoint::T5, Mode::Trained);

        assert!(out.is_demo());
        let notice = out.notice.unwrap();
        assert!(notice.contains("HeadSize"));
        assert!(notice.contains("Approach"));
        assert!(!notice.contains("AgePreOp"));
    }

    #[test]
    fn mode_comes_from_source() {
        assert_eq!(PredictionPolicy::new(Fake::Absent).detect_mode(), Mode::Demo);
        assert_eq!(
            PredictionPolicy::new(Fake::Constant(0.0)).detect_mode(),
            Mode::Trained
        );
    }
}
