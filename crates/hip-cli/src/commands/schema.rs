use hip_core::record::PatientRecord;
use hip_core::responses::{Prediction, StatusResponse};
use hip_model::preprocessor::ColumnPreprocessor;
use hip_model::regressor::RegressorModel;
use schemars::schema_for;

use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Handle `hipcalc schema`. Always JSON; `--format raw` prints one line.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Json | OutputFormat::Table => OutputFormat::Json,
    };
    output::output(&schema_value(args.type_name)?, format)
}

fn schema_value(kind: SchemaType) -> anyhow::Result<serde_json::Value> {
    let schema = match kind {
        SchemaType::Record => schema_for!(PatientRecord),
        SchemaType::Preprocessor => schema_for!(ColumnPreprocessor),
        SchemaType::Regressor => schema_for!(RegressorModel),
        SchemaType::Prediction => schema_for!(Prediction),
        SchemaType::Status => schema_for!(StatusResponse),
    };
    Ok(serde_json::to_value(schema)?)
}
