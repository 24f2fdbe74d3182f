//! Plain aligned columns for `features`, `status` and the prediction summary.
//!
//! The last column is the free-text one (description, path, value), so it
//! is the one shortened when the terminal is too narrow.

use hip_core::enums::PainLevel;

const MIN_COLUMN: usize = 6;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Header, dashed divider, then one line per row. Missing cells print `-`.
#[must_use]
pub fn render_columns(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect::<Vec<_>>();
    shrink_last(&mut widths, options.max_width);

    let line = |cells: Vec<String>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let shown = truncate(cell, *width);
                let pad = width.saturating_sub(shown.chars().count());
                let shown = if options.color {
                    colorize(&shown)
                } else {
                    shown
                };
                format!("{shown}{}", " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join(GAP)
            .trim_end()
            .to_string()
    };

    let header = line(headers.iter().map(ToString::to_string).collect());
    let divider =
        "-".repeat(widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1));

    let mut lines = vec![header, divider];
    lines.extend(rows.iter().map(|row| {
        line(
            (0..widths.len())
                .map(|index| row.get(index).cloned().unwrap_or_else(|| "-".to_string()))
                .collect(),
        )
    }));
    lines.join("\n")
}

/// Give the overflow to the last column, never below [`MIN_COLUMN`].
fn shrink_last(widths: &mut [usize], max_width: Option<usize>) {
    let (Some(max_width), Some(last)) = (max_width, widths.len().checked_sub(1)) else {
        return;
    };
    let total = widths.iter().sum::<usize>() + GAP.len() * last;
    if total > max_width {
        let overflow = total - max_width;
        widths[last] = widths[last].saturating_sub(overflow).max(MIN_COLUMN);
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out = value.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

/// Artifact states and run modes, then pain levels in their own colors.
fn colorize(cell: &str) -> String {
    let code = match cell {
        "true" | "trained" | "present" => Some("32"),
        "demo" => Some("33"),
        "false" | "missing" => Some("31"),
        other => [
            PainLevel::Minimal,
            PainLevel::Mild,
            PainLevel::Moderate,
            PainLevel::Severe,
        ]
        .into_iter()
        .find(|level| level.as_str() == other)
        .map(PainLevel::ansi_color),
    };
    code.map_or_else(|| cell.to_string(), |code| paint(cell, code))
}

/// Wrap `value` in an SGR color sequence.
#[must_use]
pub fn paint(value: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}

#[cfg(test)]
pub fn strip_ansi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            chars.by_ref().find(|next| *next == 'm');
        } else {
            out.push(ch);
        }
    }
    out
}
