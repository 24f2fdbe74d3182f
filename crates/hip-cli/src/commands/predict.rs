use hip_core::catalog::features_for;
use hip_core::record::PatientRecord;
use hip_core::responses::Prediction;

use crate::cli::root_commands::PredictArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::{collect_warnings, parse_assignments, read_record};
use crate::context::AppContext;
use crate::output;

/// Handle `hipcalc predict`.
pub fn handle(args: &PredictArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let prediction = run(args, ctx)?;
    match flags.format {
        OutputFormat::Table => {
            println!(
                "{}",
                output::gauge::render_prediction(&prediction, output::table_options())
            );
            Ok(())
        }
        format => output::output(&prediction, format),
    }
}

/// Assemble the record and predict. Only input errors fail; model trouble
/// degrades to demo mode inside the policy.
fn run(args: &PredictArgs, ctx: &AppContext) -> anyhow::Result<Prediction> {
    let timepoint = ctx.timepoint(args.timepoint);
    let record = assemble_record(args)?;
    let mode = ctx.policy.detect_mode();
    tracing::debug!(%timepoint, %mode, features = record.len(), "predicting");

    let mut prediction = ctx.policy.predict(&record, timepoint, mode);
    prediction.warnings = collect_warnings(&record, features_for(timepoint));
    Ok(prediction)
}

/// `--input` file first, then `--set` values on top.
fn assemble_record(args: &PredictArgs) -> anyhow::Result<PatientRecord> {
    let mut record = match &args.input {
        Some(path) => read_record(path)?,
        None => PatientRecord::new(),
    };
    record.extend(parse_assignments(&args.set)?);
    Ok(record)
}
