//! The clamped pain score.

use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::PainLevel;

/// Pain score on the 0-8 scale. Always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct PainScore(f64);

impl PainScore {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 8.0;

    /// Clamp a raw model or heuristic output into range. `NaN` becomes `0`.
    #[must_use]
    pub fn clamped(raw: f64) -> Self {
        if raw.is_nan() {
            return Self(Self::MIN);
        }
        Self(raw.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn level(self) -> PainLevel {
        PainLevel::from_score(self.0)
    }

    /// Fraction of the full scale, `0.0..=1.0`.
    #[must_use]
    pub fn fraction(self) -> f64 {
        self.0 / Self::MAX
    }
}

impl fmt::Display for PainScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl From<PainScore> for f64 {
    fn from(score: PainScore) -> Self {
        score.0
    }
}

impl<'de> Deserialize<'de> for PainScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Self::clamped)
    }
}

impl JsonSchema for PainScore {
    fn schema_name() -> Cow<'static, str> {
        "PainScore".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "number",
            "minimum": Self::MIN,
            "maximum": Self::MAX,
        })
    }
}
