//! Demo-mode heuristic used when no trained model is usable.
//!
//! ```text
//! T3: 2.0 + 0.01·BMI_Current + 0.01·AgePreOp + 0.2·Pre-Op Pain − 0.1·WalkPain
//! T5: 1.5 + 0.008·BMI_Current + 0.005·AgePreOp + 0.15·Pre-Op Pain
//!       − 0.5·[Approach = Posterior]
//! ```
//!
//! Absent or non-numeric inputs take their defaults instead of failing:
//! BMI_Current 25, AgePreOp 65, Pre-Op Pain 5, WalkPain 5. `Approach` has no
//! default; anything but `"Posterior"` contributes nothing.

use hip_core::catalog::{AGE_PRE_OP, APPROACH, BMI_CURRENT, PRE_OP_PAIN, WALK_PAIN};
use hip_core::enums::Timepoint;
use hip_core::record::PatientRecord;
use hip_core::score::PainScore;

use crate::error::PredictError;

pub const DEFAULT_BMI: f64 = 25.0;
pub const DEFAULT_AGE: f64 = 65.0;
pub const DEFAULT_PRE_OP_PAIN: f64 = 5.0;
pub const DEFAULT_WALK_PAIN: f64 = 5.0;

/// Closed-form demo estimate, clamped to the 0-8 scale.
#[must_use]
pub fn predict_demo(record: &PatientRecord, timepoint: Timepoint) -> PainScore {
    let bmi = record.number(BMI_CURRENT).unwrap_or(DEFAULT_BMI);
    let age = record.number(AGE_PRE_OP).unwrap_or(DEFAULT_AGE);
    let pre_op = record.number(PRE_OP_PAIN).unwrap_or(DEFAULT_PRE_OP_PAIN);

    let raw = match timepoint {
        Timepoint::T3 => {
            let walk = record.number(WALK_PAIN).unwrap_or(DEFAULT_WALK_PAIN);
            2.0 + 0.01 * bmi + 0.01 * age + 0.2 * pre_op - 0.1 * walk
        }
        Timepoint::T5 => {
            let posterior = record
                .get(APPROACH)
                .is_some_and(|value| value.as_text() == "Posterior");
            let approach = if posterior { 0.5 } else { 0.0 };
            1.5 + 0.008 * bmi + 0.005 * age + 0.15 * pre_op - approach
        }
    };

    PainScore::clamped(raw)
}

/// [`predict_demo`] with a textual timepoint.
///
/// # Errors
///
/// Returns [`PredictError::InvalidTimepoint`] for anything but `T3`/`T5`.
pub fn predict_demo_code(
    record: &PatientRecord,
    timepoint: &str,
) -> Result<PainScore, PredictError> {
    Ok(predict_demo(record, timepoint.parse()?))
}
