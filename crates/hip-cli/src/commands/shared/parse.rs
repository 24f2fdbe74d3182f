use std::path::Path;

use anyhow::Context;
use hip_core::catalog::input_kind;
use hip_core::record::{PatientRecord, split_assignment};

/// Read a JSON object of feature values.
pub fn read_record(path: &Path) -> anyhow::Result<PatientRecord> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid patient record in {}", path.display()))
}

/// Parse repeated `NAME=VALUE` flags, each value interpreted by its
/// feature's input kind.
pub fn parse_assignments(raw: &[String]) -> anyhow::Result<PatientRecord> {
    let mut record = PatientRecord::new();
    for assignment in raw {
        let (name, value) = split_assignment(assignment)
            .with_context(|| format!("invalid --set '{assignment}'"))?;
        let value = input_kind(name).parse_value(name, value)?;
        record.insert(name, value);
    }
    Ok(record)
}

/// Soft input checks: values outside their collected range and names the
/// timepoint does not use.
#[must_use]
pub fn collect_warnings(record: &PatientRecord, features: &[&str]) -> Vec<String> {
    record
        .iter()
        .filter_map(|(name, value)| {
            if features.contains(&name) {
                input_kind(name).check(name, value)
            } else {
                Some(format!("{name} is not used at this timepoint and was ignored"))
            }
        })
        .collect()
}
