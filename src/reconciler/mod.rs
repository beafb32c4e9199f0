pub mod observer;

pub use observer::{LogObserver, NullObserver, ReconcileObserver};

use crate::config::settings::ReconcilerSettings;
use crate::domain::{
    FillInstruction, HalfShade, ResultRow, StandingsEntry, StandingsIndex, SubjectStats,
};
use crate::matching;
use crate::metrics::{self, ExpectedPerformance};
use crate::parsers::results::parse_match_day_number;

/// Walk the result rows and produce a fill instruction for every eligible
/// row whose opponent resolves. Rows are independent; output order follows
/// input order.
pub fn reconcile(
    rows: &[ResultRow],
    index: &StandingsIndex,
    subject: &SubjectStats,
    settings: &ReconcilerSettings,
    observer: &dyn ReconcileObserver,
) -> Vec<FillInstruction> {
    let mut instructions = Vec::new();
    for row in rows {
        if let Some(instruction) = fill_row(row, index, subject, settings, observer) {
            instructions.push(instruction);
        }
    }

    observer.rows_filled(instructions.len());
    instructions
}

fn fill_row(
    row: &ResultRow,
    index: &StandingsIndex,
    subject: &SubjectStats,
    settings: &ReconcilerSettings,
    observer: &dyn ReconcileObserver,
) -> Option<FillInstruction> {
    if !is_eligible(row, settings) {
        return None;
    }

    let Some(opponent) = matching::resolve(&row.opponent_display, index) else {
        // Per-row condition, not fatal to the batch
        observer.opponent_unmatched(&row.opponent_display);
        return None;
    };

    let performance = metrics::compute(subject, opponent);
    let decimals = settings.metric_decimals;

    let mut instruction = FillInstruction::for_row(row.row);
    if row.result_blank() {
        instruction.result_text = Some(result_text(&performance, decimals));
        instruction.tooltip_text = Some(tooltip_text(subject, opponent, &performance, decimals));
        instruction.shade = Some(shade_halves(&performance));
    }
    if row.record_blank() {
        instruction.record_text = Some(opponent.record.clone());
    }
    if row.rank_blank() {
        instruction.rank_text = Some(opponent.rank.clone());
    }

    Some(instruction)
}

fn is_eligible(row: &ResultRow, settings: &ReconcilerSettings) -> bool {
    let Some(match_day) = parse_match_day_number(&row.match_day_text) else {
        return false;
    };
    if match_day < settings.min_match_day || match_day > settings.max_match_day {
        return false;
    }
    if !(row.result_blank() || row.record_blank() || row.rank_blank()) {
        return false;
    }
    !row.opponent_display.is_empty()
}

fn result_text(performance: &ExpectedPerformance, decimals: usize) -> String {
    format!(
        "{:.decimals$}\u{22C5}{:.decimals$}",
        performance.oepaa, performance.pepaa
    )
}

fn tooltip_text(
    subject: &SubjectStats,
    opponent: &StandingsEntry,
    performance: &ExpectedPerformance,
    decimals: usize,
) -> String {
    let lines = [
        format!("Opponent: TCA={}, PCAA={}", opponent.tca, opponent.pcaa),
        format!("Player: TCA={}, PCAA={}", subject.tca, subject.pcaa),
        format!(
            "PEPA={:.decimals$}, OEPA={:.decimals$}",
            performance.pepa, performance.oepa
        ),
        format!(
            "PEPAA={:.decimals$}, OEPAA={:.decimals$} (games={})",
            performance.pepaa, performance.oepaa, performance.games_played
        ),
    ];
    lines.join("\n")
}

/// Strict inequalities: exactly equal averages leave both halves inactive.
fn shade_halves(performance: &ExpectedPerformance) -> HalfShade {
    HalfShade {
        left_red: performance.oepaa > performance.pepaa,
        right_green: performance.pepaa > performance.oepaa,
    }
}
