use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output;

/// Handle `hipcalc status`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = ctx.store.status();

    match flags.format {
        OutputFormat::Table => {
            let mut summary = serde_json::to_value(&status)?;
            if let Some(map) = summary.as_object_mut() {
                map.remove("artifacts");
            }
            output::output(&summary, OutputFormat::Table)?;
            println!();

            let rows = status
                .artifacts
                .iter()
                .flat_map(|artifact| {
                    [
                        (artifact.timepoint, "model", &artifact.model_path, artifact.model_present),
                        (
                            artifact.timepoint,
                            "preprocessor",
                            &artifact.preprocessor_path,
                            artifact.preprocessor_present,
                        ),
                    ]
                })
                .map(|(timepoint, kind, path, present)| {
                    vec![
                        timepoint.to_string(),
                        kind.to_string(),
                        path.clone(),
                        if present { "present" } else { "missing" }.to_string(),
                    ]
                })
                .collect::<Vec<_>>();
            println!(
                "{}",
                output::table::render_columns(
                    &["timepoint", "artifact", "path", "state"],
                    &rows,
                    output::table_options(),
                )
            );
            Ok(())
        }
        format => output::output(&status, format),
    }
}
