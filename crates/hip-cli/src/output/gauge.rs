//! Text rendering of a prediction for table output.
//!
//! ```text
//! timepoint  T3 (3 years)
//! score      3.4
//! ...
//! [#####.....] 3.4/8
//! Predicted pain level: mild
//! ```

use hip_core::responses::Prediction;
use hip_core::score::PainScore;

use super::table::{TableOptions, paint, render_columns};

pub const GAUGE_WIDTH: usize = 10;

/// `[#####.....] 3.4/8`. Any non-zero score fills at least one cell.
#[must_use]
pub fn gauge(score: PainScore, width: usize) -> String {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let filled = ((score.fraction() * width as f64).ceil() as usize).min(width);
    format!(
        "[{}{}] {score}/{}",
        "#".repeat(filled),
        ".".repeat(width - filled),
        PainScore::MAX
    )
}

/// Key/value summary, gauge, interpretation, then any notice and warnings.
#[must_use]
pub fn render_prediction(prediction: &Prediction, options: TableOptions) -> String {
    let level = prediction.level.as_str();
    let rows = vec![
        vec!["timepoint".to_string(), prediction.timepoint.label()],
        vec!["score".to_string(), prediction.score.to_string()],
        vec!["level".to_string(), level.to_string()],
        vec!["source".to_string(), prediction.source.to_string()],
    ];

    let mut lines = vec![
        render_columns(&["key", "value"], &rows, options),
        String::new(),
        gauge(prediction.score, GAUGE_WIDTH),
    ];

    let shown_level = if options.color {
        paint(level, prediction.level.ansi_color())
    } else {
        level.to_string()
    };
    lines.push(format!("Predicted pain level: {shown_level}"));
    lines.push(format!(
        "This prediction suggests a {level} pain level ({}/8) at {}.",
        prediction.score,
        prediction.timepoint.label()
    ));

    if let Some(notice) = &prediction.notice {
        lines.push(format!("note: {notice}"));
    }
    for warning in &prediction.warnings {
        lines.push(format!("warning: {warning}"));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use hip_core::enums::{PredictionSource, Timepoint};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[rstest]
    #[case(0.0, "[..........] 0.0/8")]
    #[case(0.1, "[#.........] 0.1/8")]
    #[case(3.4, "[#####.....] 3.4/8")]
    #[case(4.0, "[#####.....] 4.0/8")]
    #[case(8.0, "[##########] 8.0/8")]
    fn gauge_cells(#[case] score: f64, #[case] expected: &str) {
        assert_eq!(gauge(PainScore::clamped(score), GAUGE_WIDTH), expected);
    }

    #[test]
    fn prediction_block_has_gauge_and_interpretation() {
        let prediction = Prediction::new(
            Timepoint::T3,
            PainScore::clamped(3.4),
            PredictionSource::Trained,
        );
        let out = render_prediction(&prediction, PLAIN);

        assert!(out.contains("T3 (3 years)"));
        assert!(out.contains("[#####.....] 3.4/8"));
        assert!(out.contains("Predicted pain level: mild"));
        assert!(
            out.contains("This prediction suggests a mild pain level (3.4/8) at T3 (3 years).")
        );
        assert!(!out.contains("note:"));
    }

    #[test]
    fn notice_and_warnings_follow_interpretation() {
        let mut prediction = Prediction::new(
            Timepoint::T5,
            PainScore::clamped(7.0),
            PredictionSource::Demo,
        )
        .with_notice("Pre-trained models not found");
        prediction.warnings.push("WalkPain=12 is outside the expected range 0-10".into());

        let out = render_prediction(&prediction, PLAIN);
        let tail: Vec<&str> = out.lines().rev().take(2).collect();
        assert_eq!(
            tail,
            vec![
                "warning: WalkPain=12 is outside the expected range 0-10",
                "note: Pre-trained models not found",
            ]
        );
        assert!(out.contains("Predicted pain level: severe"));
    }

    #[test]
    fn colored_level_uses_level_color() {
        let prediction = Prediction::new(
            Timepoint::T3,
            PainScore::clamped(1.0),
            PredictionSource::Demo,
        );
        let out = render_prediction(
            &prediction,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(out.contains("Predicted pain level: \u{1b}[32mminimal\u{1b}[0m"));
    }
}
