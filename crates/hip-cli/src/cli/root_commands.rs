use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use hip_core::enums::Timepoint;

/// Top-level commands for the `hipcalc` binary.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Predict post-operative pain for one patient record.
    Predict(PredictArgs),
    /// List the features a timepoint needs.
    Features(FeaturesArgs),
    /// Show the models directory, run mode and artifact presence.
    Status,
    /// Dump JSON schema for a record, artifact or response type.
    Schema(SchemaArgs),
}

/// Arguments for `hipcalc predict`.
#[derive(Clone, Debug, Args)]
pub struct PredictArgs {
    /// Follow-up horizon: T3 or T5 (defaults to `general.default_timepoint`).
    #[arg(short, long)]
    pub timepoint: Option<Timepoint>,
    /// JSON object of feature values.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,
    /// Feature value, repeatable. Overrides `--input`.
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,
}

/// Arguments for `hipcalc features`.
#[derive(Clone, Debug, Args)]
pub struct FeaturesArgs {
    /// Follow-up horizon (defaults to `general.default_timepoint`).
    #[arg(short, long)]
    pub timepoint: Option<Timepoint>,
}

/// Arguments for `hipcalc schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

/// Types `hipcalc schema` can describe.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Record,
    Preprocessor,
    Regressor,
    Prediction,
    Status,
}
