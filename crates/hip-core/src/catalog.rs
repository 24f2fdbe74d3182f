//! Static feature catalog: which features each timepoint needs, what they
//! mean, and what kind of input they take.

use std::fmt;

use serde::Serialize;

use crate::enums::Timepoint;
use crate::errors::CoreError;
use crate::record::FeatureValue;

pub const LOS: &str = "LOS";
pub const BMI_CURRENT: &str = "BMI_Current";
pub const WOMACP_5: &str = "WOMACP_5";
pub const WEIGHT_CURRENT: &str = "WeightCurrent";
pub const ICOAPC_3: &str = "ICOAPC_3";
pub const ICOAPC_1: &str = "ICOAPC_1";
pub const AGE_PRE_OP: &str = "AgePreOp";
pub const WOMACP_3: &str = "WOMACP_3";
pub const WALK_PAIN: &str = "WalkPain";
pub const MOBILITY_AID_WALKER: &str = "MobilityAidWalker";
pub const PRE_OP_PAIN: &str = "Pre-Op Pain";
pub const HEIGHT_CURRENT: &str = "HeightCurrent";
pub const RESULTS_RELIEF: &str = "ResultsRelief";
pub const APPROACH: &str = "Approach";
pub const HEAD_SIZE: &str = "HeadSize";

/// Features required by the three-year model.
pub const T3_FEATURES: [&str; 13] = [
    LOS,
    BMI_CURRENT,
    WOMACP_5,
    WEIGHT_CURRENT,
    ICOAPC_3,
    ICOAPC_1,
    AGE_PRE_OP,
    WOMACP_3,
    WALK_PAIN,
    MOBILITY_AID_WALKER,
    PRE_OP_PAIN,
    HEIGHT_CURRENT,
    RESULTS_RELIEF,
];

/// Features required by the five-year model.
pub const T5_FEATURES: [&str; 12] = [
    AGE_PRE_OP,
    BMI_CURRENT,
    WEIGHT_CURRENT,
    HEIGHT_CURRENT,
    LOS,
    WOMACP_5,
    RESULTS_RELIEF,
    ICOAPC_3,
    PRE_OP_PAIN,
    WALK_PAIN,
    APPROACH,
    HEAD_SIZE,
];

pub const APPROACH_CHOICES: [&str; 4] = ["Posterior", "Anterior", "Lateral", "Other"];
pub const HEAD_SIZE_CHOICES: [&str; 5] = ["28", "32", "36", "40", "Other"];

/// Ordered feature names for a timepoint. Order is for display only.
#[must_use]
pub const fn features_for(timepoint: Timepoint) -> &'static [&'static str] {
    match timepoint {
        Timepoint::T3 => &T3_FEATURES,
        Timepoint::T5 => &T5_FEATURES,
    }
}

/// Feature names for a textual timepoint code.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTimepoint`] for anything but `T3`/`T5`.
pub fn features_for_code(code: &str) -> Result<&'static [&'static str], CoreError> {
    code.parse().map(features_for)
}

/// Human-readable description, or `""` for unknown names.
#[must_use]
pub fn describe(name: &str) -> &'static str {
    match name {
        LOS => "Length of stay (days)",
        BMI_CURRENT => "Body Mass Index",
        WOMACP_5 => "Pain standing upright (0-4)",
        WEIGHT_CURRENT => "Current weight (kg)",
        ICOAPC_3 => {
            "In the past week, how much has your constant hip pain affected your overall quality of life (0-4)"
        }
        ICOAPC_1 => "In the past week, how intense has your constant hip pain been? (0-4)",
        AGE_PRE_OP => "Age at pre-op (years)",
        WOMACP_3 => "Pain at night while in bed (0-4)",
        WALK_PAIN => "Pain while walking (0-10)",
        MOBILITY_AID_WALKER => "Uses walker as mobility aid",
        PRE_OP_PAIN => "Pre-operation pain score (0-10)",
        HEIGHT_CURRENT => "Current height (cm)",
        RESULTS_RELIEF => "Expected relief result (1-5)",
        APPROACH => r#"Surgical approach (e.g., "Posterior", "Anterior")"#,
        HEAD_SIZE => "Size of the femoral head implant (mm)",
        _ => "",
    }
}

/// How a feature is collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureInput {
    /// `0` (no) or `1` (yes).
    YesNo,
    /// One of a fixed list of labels, kept as text.
    Choice { options: &'static [&'static str] },
    /// Integer scale, inclusive.
    Scale { min: u8, max: u8 },
    /// Free numeric entry.
    Number,
}

/// Input kind for a feature. Unknown names are free numeric entry.
#[must_use]
pub fn input_kind(name: &str) -> FeatureInput {
    match name {
        MOBILITY_AID_WALKER => FeatureInput::YesNo,
        APPROACH => FeatureInput::Choice {
            options: &APPROACH_CHOICES,
        },
        HEAD_SIZE => FeatureInput::Choice {
            options: &HEAD_SIZE_CHOICES,
        },
        WOMACP_5 | WOMACP_3 | ICOAPC_3 | ICOAPC_1 => FeatureInput::Scale { min: 0, max: 4 },
        RESULTS_RELIEF => FeatureInput::Scale { min: 1, max: 5 },
        WALK_PAIN | PRE_OP_PAIN => FeatureInput::Scale { min: 0, max: 10 },
        _ => FeatureInput::Number,
    }
}

impl FeatureInput {
    /// Interpret raw text for this input kind.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidFeature`] when a numeric kind gets text
    /// that is not a number, or a yes/no input gets something else.
    pub fn parse_value(self, name: &str, raw: &str) -> Result<FeatureValue, CoreError> {
        let trimmed = raw.trim();
        match self {
            Self::YesNo => match trimmed.to_ascii_lowercase().as_str() {
                "1" | "yes" | "y" | "true" => Ok(FeatureValue::Number(1.0)),
                "0" | "no" | "n" | "false" => Ok(FeatureValue::Number(0.0)),
                _ => Err(invalid(name, format!("expected yes/no, got '{trimmed}'"))),
            },
            Self::Choice { .. } => Ok(FeatureValue::Text(trimmed.to_string())),
            Self::Scale { .. } | Self::Number => trimmed
                .parse::<f64>()
                .map(FeatureValue::Number)
                .map_err(|_| invalid(name, format!("expected a number, got '{trimmed}'"))),
        }
    }

    /// Soft range check. Returns a warning message for values outside the
    /// collected range; never rejects.
    #[must_use]
    pub fn check(self, name: &str, value: &FeatureValue) -> Option<String> {
        match self {
            Self::Scale { min, max } => {
                let number = value.as_number()?;
                (number < f64::from(min) || number > f64::from(max)).then(|| {
                    format!("{name}={number} is outside the expected range {min}-{max}")
                })
            }
            Self::YesNo => {
                let number = value.as_number()?;
                (number != 0.0 && number != 1.0)
                    .then(|| format!("{name}={number} should be 0 (no) or 1 (yes)"))
            }
            Self::Choice { options } => {
                let text = value.as_text();
                (!options.contains(&text.as_str())).then(|| {
                    format!("{name}='{text}' is not one of: {}", options.join(", "))
                })
            }
            Self::Number => None,
        }
    }
}

impl fmt::Display for FeatureInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YesNo => f.write_str("yes/no"),
            Self::Choice { options } => write!(f, "one of {}", options.join("|")),
            Self::Scale { min, max } => write!(f, "scale {min}-{max}"),
            Self::Number => f.write_str("number"),
        }
    }
}

fn invalid(name: &str, reason: String) -> CoreError {
    CoreError::InvalidFeature {
        name: name.to_string(),
        reason,
    }
}
