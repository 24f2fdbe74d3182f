//! End-to-end tests over real artifact files in a temporary models directory.

use std::path::Path;

use hip_core::catalog::{T3_FEATURES, T5_FEATURES, features_for};
use hip_core::enums::{Mode, PredictionSource, Timepoint};
use hip_core::record::PatientRecord;
use hip_core::score::PainScore;
use hip_model::heuristic::predict_demo;
use hip_model::{ArtifactStore, ModelPredictor, PredictError, PredictionPolicy};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn models_dir() -> TempDir {
    let temp = TempDir::new().expect("tempdir should create");
    for entry in std::fs::read_dir(FIXTURES).expect("fixtures should exist") {
        let entry = entry.expect("fixture entry");
        std::fs::copy(entry.path(), temp.path().join(entry.file_name()))
            .expect("fixture should copy");
    }
    temp
}

fn store(dir: &Path) -> ArtifactStore {
    ArtifactStore::new(dir, "json")
}

/// Every numeric feature at its training mean.
fn t3_at_means() -> PatientRecord {
    PatientRecord::new()
        .with("LOS", 3.0)
        .with("BMI_Current", 28.0)
        .with("WOMACP_5", 2)
        .with("WeightCurrent", 80.0)
        .with("ICOAPC_3", 2)
        .with("ICOAPC_1", 2)
        .with("AgePreOp", 66)
        .with("WOMACP_3", 2)
        .with("WalkPain", 6)
        .with("MobilityAidWalker", 0.2)
        .with("Pre-Op Pain", 6)
        .with("HeightCurrent", 168.0)
        .with("ResultsRelief", 4)
}

fn t5_at_means() -> PatientRecord {
    PatientRecord::new()
        .with("AgePreOp", 66)
        .with("BMI_Current", 28.0)
        .with("WeightCurrent", 80.0)
        .with("HeightCurrent", 168.0)
        .with("LOS", 3.0)
        .with("WOMACP_5", 2)
        .with("ResultsRelief", 4)
        .with("ICOAPC_3", 2)
        .with("Pre-Op Pain", 6)
        .with("WalkPain", 6)
        .with("Approach", "Posterior")
        .with("HeadSize", "28")
}

fn close(score: PainScore, expected: f64) -> bool {
    (score.value() - expected).abs() < 1e-9
}

#[test]
fn fixtures_cover_every_catalog_feature() {
    assert_eq!(t3_at_means().missing(&T3_FEATURES), Vec::<&str>::new());
    assert_eq!(t5_at_means().missing(&T5_FEATURES), Vec::<&str>::new());
}

#[test]
fn linear_t3_model_scores_record() {
    let dir = models_dir();
    let predictor = ModelPredictor::new(store(dir.path()));

    assert!(close(predictor.predict(&t3_at_means(), Timepoint::T3).unwrap(), 2.6));

    let worse = t3_at_means().with("Pre-Op Pain", 8);
    assert!(close(predictor.predict(&worse, Timepoint::T3).unwrap(), 3.05));
}

#[rstest]
#[case("Posterior", "28", 6, 3.3)]
#[case("Posterior", "32", 6, 3.0)]
#[case("Anterior", "28", 8, 3.3)]
#[case("Lateral", "Other", 4, 2.6)]
fn tree_t5_model_scores_record(
    #[case] approach: &str,
    #[case] head_size: &str,
    #[case] pre_op: i32,
    #[case] expected: f64,
) {
    let dir = models_dir();
    let predictor = ModelPredictor::new(store(dir.path()));
    let record = t5_at_means()
        .with("Approach", approach)
        .with("HeadSize", head_size)
        .with("Pre-Op Pain", pre_op);

    assert!(close(predictor.predict(&record, Timepoint::T5).unwrap(), expected));
}

#[test]
fn numeric_head_size_is_coerced_to_category() {
    let dir = models_dir();
    let predictor = ModelPredictor::new(store(dir.path()));
    let record = t5_at_means().with("HeadSize", 32);

    assert!(close(predictor.predict(&record, Timepoint::T5).unwrap(), 3.0));
}

#[rstest]
#[case(Timepoint::T3, "WalkPain", 10_000.0)]
#[case(Timepoint::T3, "ResultsRelief", 10_000.0)]
#[case(Timepoint::T5, "Pre-Op Pain", -10_000.0)]
fn model_output_is_clamped(#[case] timepoint: Timepoint, #[case] name: &str, #[case] value: f64) {
    let dir = models_dir();
    let predictor = ModelPredictor::new(store(dir.path()));
    let base = match timepoint {
        Timepoint::T3 => t3_at_means(),
        Timepoint::T5 => t5_at_means(),
    };

    let score = predictor
        .predict(&base.with(name, value), timepoint)
        .unwrap()
        .value();
    assert!((PainScore::MIN..=PainScore::MAX).contains(&score));
}

#[test]
fn missing_features_names_exactly_the_absent_keys() {
    let dir = models_dir();
    let predictor = ModelPredictor::new(store(dir.path()));

    let mut record = PatientRecord::new();
    for name in features_for(Timepoint::T5) {
        if !matches!(*name, "LOS" | "HeadSize") {
            record.insert(*name, 1.0);
        }
    }

    match predictor.predict(&record, Timepoint::T5).unwrap_err() {
        PredictError::MissingFeatures(names) => {
            assert_eq!(names, vec!["LOS".to_string(), "HeadSize".to_string()]);
        }
        other => panic!("expected MissingFeatures, got {other:?}"),
    }
}

#[rstest]
#[case("T4")]
#[case("T3 garbage")]
#[case("t5 (5 years)")]
#[case("T3\tT5")]
fn unknown_timepoint_fails_for_both_predictors(#[case] raw: &str) {
    let dir = models_dir();
    let predictor = ModelPredictor::new(store(dir.path()));

    assert!(matches!(
        predictor.predict_code(&t3_at_means(), raw),
        Err(PredictError::InvalidTimepoint(ref got)) if got == raw
    ));
    assert!(matches!(
        hip_model::heuristic::predict_demo_code(&PatientRecord::new(), raw),
        Err(PredictError::InvalidTimepoint(ref got)) if got == raw
    ));
}

#[test]
fn removed_artifact_is_reported_missing() {
    let dir = models_dir();
    std::fs::remove_file(dir.path().join("t5_preprocessor.json")).unwrap();
    let predictor = ModelPredictor::new(store(dir.path()));

    match predictor.predict(&t5_at_means(), Timepoint::T5).unwrap_err() {
        PredictError::ArtifactsMissing { timepoint, missing } => {
            assert_eq!(timepoint, Timepoint::T5);
            assert_eq!(missing, vec![dir.path().join("t5_preprocessor.json")]);
        }
        other => panic!("expected ArtifactsMissing, got {other:?}"),
    }
}

#[test]
fn policy_uses_trained_model_when_artifacts_complete() {
    let dir = models_dir();
    let policy = PredictionPolicy::new(store(dir.path()));
    let mode = policy.detect_mode();
    assert_eq!(mode, Mode::Trained);

    let out = policy.predict(&t3_at_means(), Timepoint::T3, mode);
    assert_eq!(out.source, PredictionSource::Trained);
    assert!(close(out.score, 2.6));
    assert_eq!(out.level.as_str(), "mild");
}

#[rstest]
#[case(Timepoint::T3)]
#[case(Timepoint::T5)]
fn absent_artifacts_always_give_exact_heuristic(#[case] timepoint: Timepoint) {
    let temp = TempDir::new().expect("tempdir should create");
    let policy = PredictionPolicy::new(store(&temp.path().join("missing")));
    let mode = policy.detect_mode();
    assert_eq!(mode, Mode::Demo);

    for record in [PatientRecord::new(), t3_at_means(), t5_at_means()] {
        let out = policy.predict(&record, timepoint, mode);
        assert_eq!(out.source, PredictionSource::Demo);
        assert_eq!(out.score, predict_demo(&record, timepoint));
    }
}

#[test]
fn corrupt_artifact_falls_back_to_demo() {
    let dir = models_dir();
    std::fs::write(dir.path().join("t3_model.json"), r#"{"kind": "neural_net"}"#).unwrap();
    let policy = PredictionPolicy::new(store(dir.path()));

    let out = policy.predict(&t3_at_means(), Timepoint::T3, policy.detect_mode());
    assert_eq!(out.source, PredictionSource::Demo);
    assert!(out.notice.unwrap().contains("t3_model.json"));
}

#[test]
fn shape_mismatch_falls_back_to_demo() {
    let dir = models_dir();
    std::fs::write(
        dir.path().join("t3_model.json"),
        r#"{"kind": "linear", "intercept": 1.0, "coefficients": [0.5, 0.5]}"#,
    )
    .unwrap();
    let policy = PredictionPolicy::new(store(dir.path()));

    let out = policy.predict(&t3_at_means(), Timepoint::T3, Mode::Trained);
    assert_eq!(out.source, PredictionSource::Demo);
    assert!(out.notice.unwrap().contains("shape mismatch"));
}
