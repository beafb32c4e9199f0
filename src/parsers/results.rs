use std::sync::OnceLock;

use regex::Regex;
use scraper::{ElementRef, Html};

use crate::domain::ResultRow;
use crate::parsers::tables::{self, HeaderMatch};
use crate::parsers::text::to_comparable;

const RESULTS_SELECTOR: &str = "table.std, table";
const REQUIRED_HEADERS: &[&str] = &["MATCH DAY", "OPPONENT", "RESULT", "RECORD", "RANK"];

// Positional layout of a result row on the profile page
const MIN_CELLS: usize = 6;
const MATCH_DAY_CELL: usize = 0;
const OPPONENT_CELL: usize = 1;
const RESULT_CELL: usize = 3;
const RECORD_CELL: usize = 4;
const RANK_CELL: usize = 5;

pub fn find_results_table(doc: &Html) -> Option<ElementRef<'_>> {
    tables::locate_table(
        doc,
        RESULTS_SELECTOR,
        REQUIRED_HEADERS,
        HeaderMatch::Substring,
    )
}

/// Lift the results table's body rows into positional records. Rows with
/// fewer than six cells are not result rows and are dropped here; the row
/// index doubles as the caller's handle for applying fills.
pub fn extract_result_rows(table: &ElementRef) -> Vec<ResultRow> {
    tables::body_rows(table)
        .iter()
        .enumerate()
        .filter_map(|(row, tr)| {
            let cells = tables::row_cell_texts(tr);
            if cells.len() < MIN_CELLS {
                return None;
            }
            Some(ResultRow {
                row,
                match_day_text: cells[MATCH_DAY_CELL].clone(),
                opponent_display: cells[OPPONENT_CELL].clone(),
                result_text: cells[RESULT_CELL].clone(),
                record_text: cells[RECORD_CELL].clone(),
                rank_text: cells[RANK_CELL].clone(),
            })
        })
        .collect()
}

/// Parse the 1-2 digit round number following "MATCH DAY" or "MD"
/// (case-insensitive, optional whitespace).
pub fn parse_match_day_number(text: &str) -> Option<u32> {
    static MATCH_DAY_RE: OnceLock<Regex> = OnceLock::new();
    let re = MATCH_DAY_RE.get_or_init(|| {
        Regex::new(r"(?:MATCH\s*DAY|MD)\s*(\d{1,2})").expect("valid match-day regex")
    });

    let comparable = to_comparable(text);
    let captures = re.captures(&comparable)?;
    captures.get(1)?.as_str().parse().ok()
}
