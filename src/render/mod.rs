use colored::Colorize;

use crate::domain::{FillInstruction, FillReport, HalfShade, ResultRow};

const RESULT_WIDTH: usize = 16;

/// Render reconciled rows for the terminal. Filled cells come from the
/// instructions; a shaded result is colored to mirror the page's left-red /
/// right-green background halves, and tooltip lines print dimmed under
/// their row.
pub fn render_report(report: &FillReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<14} {:<26} {:<RESULT_WIDTH$} {:<8} {}\n",
        "MATCH DAY", "OPPONENT", "RESULT", "RECORD", "RANK"
    ));

    for row in &report.rows {
        let instruction = report.instructions.iter().find(|i| i.row == row.row);
        out.push_str(&render_row(row, instruction));
    }

    out.push_str(&format!("\n{} row(s) filled\n", report.filled_rows()));
    out
}

fn render_row(row: &ResultRow, instruction: Option<&FillInstruction>) -> String {
    let result = render_result(row, instruction);
    let record = filled_or(&row.record_text, instruction.and_then(|i| i.record_text.as_deref()));
    let rank = filled_or(&row.rank_text, instruction.and_then(|i| i.rank_text.as_deref()));

    let mut line = format!(
        "{:<14} {:<26} {} {:<8} {}\n",
        row.match_day_text, row.opponent_display, result, record, rank
    );

    if let Some(tooltip) = instruction.and_then(|i| i.tooltip_text.as_deref()) {
        for tip in tooltip.lines() {
            line.push_str(&format!("    {}\n", tip.dimmed()));
        }
    }
    line
}

fn filled_or<'a>(existing: &'a str, filled: Option<&'a str>) -> &'a str {
    filled.unwrap_or(existing)
}

fn render_result(row: &ResultRow, instruction: Option<&FillInstruction>) -> String {
    let filled = instruction.and_then(|i| i.result_text.as_deref());
    let Some(text) = filled else {
        return format!("{:<RESULT_WIDTH$}", row.result_text);
    };

    let shade = instruction
        .and_then(|i| i.shade)
        .unwrap_or(HalfShade {
            left_red: false,
            right_green: false,
        });
    shaded_result(text, shade)
}

/// Color the two halves of "{oepaa}⋅{pepaa}" independently. Width padding
/// happens before coloring so escape codes never skew the columns.
fn shaded_result(text: &str, shade: HalfShade) -> String {
    let padded = format!("{:<RESULT_WIDTH$}", text);
    let Some((left, right)) = padded.split_once('\u{22C5}') else {
        return padded;
    };

    let left = if shade.left_red {
        left.red().to_string()
    } else {
        left.to_string()
    };
    let right = if shade.right_green {
        right.green().to_string()
    } else {
        right.to_string()
    };
    format!("{}\u{22C5}{}", left, right)
}
