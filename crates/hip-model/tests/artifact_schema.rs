//! The shipped fixture artifacts validate against the schemas `hipcalc schema`
//! prints, and decode into the artifact types.

use hip_model::preprocessor::ColumnPreprocessor;
use hip_model::regressor::RegressorModel;
use rstest::rstest;
use schemars::schema_for;

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn read_fixture(name: &str) -> serde_json::Value {
    let raw = std::fs::read_to_string(format!("{FIXTURES}/{name}")).expect("fixture should read");
    serde_json::from_str(&raw).expect("fixture should be json")
}

fn schema_errors(schema: &serde_json::Value, instance: &serde_json::Value) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

#[rstest]
#[case("t3_preprocessor.json")]
#[case("t5_preprocessor.json")]
fn preprocessor_fixture_matches_schema(#[case] name: &str) {
    let schema = serde_json::to_value(schema_for!(ColumnPreprocessor)).unwrap();
    let instance = read_fixture(name);

    let errors = schema_errors(&schema, &instance);
    assert!(errors.is_empty(), "{name}: {errors:?}");
    serde_json::from_value::<ColumnPreprocessor>(instance).expect("should decode");
}

#[rstest]
#[case("t3_model.json")]
#[case("t5_model.json")]
fn model_fixture_matches_schema(#[case] name: &str) {
    let schema = serde_json::to_value(schema_for!(RegressorModel)).unwrap();
    let instance = read_fixture(name);

    let errors = schema_errors(&schema, &instance);
    assert!(errors.is_empty(), "{name}: {errors:?}");
    serde_json::from_value::<RegressorModel>(instance).expect("should decode");
}

#[test]
fn unknown_model_kind_fails_schema() {
    let schema = serde_json::to_value(schema_for!(RegressorModel)).unwrap();
    let instance = serde_json::json!({"kind": "neural_net", "layers": []});
    assert!(!schema_errors(&schema, &instance).is_empty());
}

#[test]
fn preprocessor_widths_match_models() {
    let t3: ColumnPreprocessor =
        serde_json::from_value(read_fixture("t3_preprocessor.json")).unwrap();
    let t5: ColumnPreprocessor =
        serde_json::from_value(read_fixture("t5_preprocessor.json")).unwrap();
    assert_eq!(t3.output_width(), 13);
    assert_eq!(t5.output_width(), 18);

    let RegressorModel::Linear(linear) =
        serde_json::from_value(read_fixture("t3_model.json")).unwrap()
    else {
        panic!("t3 fixture should be linear");
    };
    assert_eq!(linear.coefficients.len(), t3.output_width());
}
