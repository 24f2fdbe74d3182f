use hip_core::catalog::{describe, features_for, input_kind};
use hip_core::enums::Timepoint;
use hip_core::responses::FeatureInfo;

use crate::cli::root_commands::FeaturesArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output;

/// Handle `hipcalc features`.
pub fn handle(args: &FeaturesArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let timepoint = ctx.timepoint(args.timepoint);
    let features = feature_infos(timepoint);

    match flags.format {
        OutputFormat::Table => {
            let rows = features
                .iter()
                .map(|info| {
                    vec![info.name.clone(), info.input.clone(), info.description.clone()]
                })
                .collect::<Vec<_>>();
            println!("Features for {}", timepoint.label());
            println!(
                "{}",
                output::table::render_columns(
                    &["name", "input", "description"],
                    &rows,
                    output::table_options(),
                )
            );
            Ok(())
        }
        format => output::output(&features, format),
    }
}

/// Catalog rows for `timepoint`, in model column order.
#[must_use]
pub fn feature_infos(timepoint: Timepoint) -> Vec<FeatureInfo> {
    features_for(timepoint)
        .iter()
        .map(|name| FeatureInfo {
            name: (*name).to_string(),
            description: describe(name).to_string(),
            input: input_kind(name).to_string(),
        })
        .collect()
}
