//! CLI response types returned by `hipcalc` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::features_for;
use crate::enums::{Mode, PainLevel, PredictionSource, Timepoint};
use crate::score::PainScore;

/// Response from `hipcalc predict`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Prediction {
    pub timepoint: Timepoint,
    pub score: PainScore,
    pub level: PainLevel,
    pub source: PredictionSource,
    /// Why the trained path was not used, when it was not.
    pub notice: Option<String>,
    /// Features the timepoint uses, in model column order.
    pub features: Vec<String>,
    /// Input warnings (out-of-range scales, unknown choices).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Prediction {
    #[must_use]
    pub fn new(timepoint: Timepoint, score: PainScore, source: PredictionSource) -> Self {
        Self {
            timepoint,
            score,
            level: score.level(),
            source,
            notice: None,
            features: features_for(timepoint)
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            warnings: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }

    #[must_use]
    pub const fn is_demo(&self) -> bool {
        matches!(self.source, PredictionSource::Demo)
    }
}

/// One row of `hipcalc features`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FeatureInfo {
    pub name: String,
    pub description: String,
    pub input: String,
}

/// Artifact presence for one timepoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ArtifactStatus {
    pub timepoint: Timepoint,
    pub model_path: String,
    pub model_present: bool,
    pub preprocessor_path: String,
    pub preprocessor_present: bool,
}

impl ArtifactStatus {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.model_present && self.preprocessor_present
    }
}

/// Response from `hipcalc status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusResponse {
    pub models_dir: String,
    pub models_dir_present: bool,
    pub mode: Mode,
    pub artifacts: Vec<ArtifactStatus>,
}
