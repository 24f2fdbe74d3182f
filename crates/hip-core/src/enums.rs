//! Timepoints, pain levels, prediction sources and run modes.
//!
//! All enums except [`Timepoint`] use `snake_case` serialization via
//! `#[serde(rename_all = "snake_case")]`. Timepoints serialize as their
//! display codes (`"T3"`, `"T5"`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Timepoint
// ---------------------------------------------------------------------------

/// Post-operative follow-up horizon. Each one has its own feature set and
/// its own trained artifact pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub enum Timepoint {
    /// Three years after the operation.
    T3,
    /// Five years after the operation.
    T5,
}

impl Timepoint {
    pub const ALL: [Self; 2] = [Self::T3, Self::T5];

    /// Display code (`"T3"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::T3 => "T3",
            Self::T5 => "T5",
        }
    }

    /// Lowercase code used in artifact file names (`"t3"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::T3 => "t3",
            Self::T5 => "t5",
        }
    }

    #[must_use]
    pub const fn years(self) -> u8 {
        match self {
            Self::T3 => 3,
            Self::T5 => 5,
        }
    }

    /// Human label, e.g. `"T3 (3 years)"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{} ({} years)", self.as_str(), self.years())
    }
}

impl fmt::Display for Timepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timepoint {
    type Err = CoreError;

    /// Case-insensitive, surrounding whitespace ignored. Nothing else is
    /// accepted.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "T3" => Ok(Self::T3),
            "T5" => Ok(Self::T5),
            _ => Err(CoreError::InvalidTimepoint(raw.to_string())),
        }
    }
}

/// Same spellings as [`FromStr`], so config files and flags agree.
impl<'de> Deserialize<'de> for Timepoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// PainLevel
// ---------------------------------------------------------------------------

/// Categorical interpretation of a pain score on the 0-8 scale.
///
/// ```text
/// score <= 2  → minimal
/// score <= 4  → mild
/// score <= 6  → moderate
/// otherwise   → severe
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PainLevel {
    Minimal,
    Mild,
    Moderate,
    Severe,
}

impl PainLevel {
    /// Band a raw score. Each band includes its upper boundary.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score <= 2.0 {
            Self::Minimal
        } else if score <= 4.0 {
            Self::Mild
        } else if score <= 6.0 {
            Self::Moderate
        } else {
            Self::Severe
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }

    /// Terminal color code used when rendering the level.
    #[must_use]
    pub const fn ansi_color(self) -> &'static str {
        match self {
            Self::Minimal => "32",
            Self::Mild => "34",
            Self::Moderate => "33",
            Self::Severe => "31",
        }
    }
}

impl fmt::Display for PainLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PredictionSource
// ---------------------------------------------------------------------------

/// Which strategy produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PredictionSource {
    /// Trained regressor and preprocessor.
    Trained,
    /// Closed-form heuristic.
    Demo,
}

impl PredictionSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trained => "trained",
            Self::Demo => "demo",
        }
    }
}

impl fmt::Display for PredictionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Run mode detected from the artifact directory before predicting.
///
/// `Demo` means the trained path is never attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Trained,
    Demo,
}

impl Mode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trained => "trained",
            Self::Demo => "demo",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
