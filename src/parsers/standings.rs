use anyhow::{Result, anyhow, bail};
use scraper::{ElementRef, Html};

use crate::domain::{StandingsEntry, StandingsIndex};
use crate::errors::parse_context;
use crate::parsers::tables::{self, HeaderMatch};

const STANDINGS_SELECTOR: &str = "table";
const REQUIRED_HEADERS: &[&str] = &["PLAYER", "W", "L", "T", "TCA", "PCAA"];
const RANK_HEADER: &str = "RANK";

/// Column positions resolved from the standings header row. `RANK` is the
/// only optional column.
struct StandingsColumns {
    rank: Option<usize>,
    player: usize,
    wins: usize,
    losses: usize,
    ties: usize,
    tca: usize,
    pcaa: usize,
}

impl StandingsColumns {
    fn from_table(table: &ElementRef) -> Option<Self> {
        let headers = tables::header_texts(table)?;
        let position = |token: &str| headers.iter().position(|h| h.as_str() == token);

        Some(Self {
            rank: position(RANK_HEADER),
            player: position("PLAYER")?,
            wins: position("W")?,
            losses: position("L")?,
            ties: position("T")?,
            tca: position("TCA")?,
            pcaa: position("PCAA")?,
        })
    }
}

/// Parse the rundle standings page into a display-name index.
///
/// Rows that fail numeric validation are discarded individually and do not
/// abort the parse; an index with zero surviving rows is a parse failure,
/// not an empty result.
pub fn parse_standings(html_text: &str) -> Result<StandingsIndex> {
    let doc = Html::parse_document(html_text);

    let Some(table) = tables::locate_table(
        &doc,
        STANDINGS_SELECTOR,
        REQUIRED_HEADERS,
        HeaderMatch::ExactTokens,
    ) else {
        bail!(parse_context("standings: header scan found no table"));
    };

    let columns = StandingsColumns::from_table(&table)
        .ok_or_else(|| anyhow!(parse_context("standings header row")))?;

    let mut index = StandingsIndex::new();
    for (position, row) in tables::body_rows(&table).iter().enumerate() {
        let cells = tables::row_cell_texts(row);
        if cells.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        if let Some(entry) = parse_row(&cells, &columns, position) {
            index.insert(entry);
        }
    }

    if index.is_empty() {
        bail!(parse_context("standings: no usable rows"));
    }
    Ok(index)
}

/// One body row. `None` when the name is empty or any of the five numeric
/// fields fails to parse.
fn parse_row(
    cells: &[String],
    columns: &StandingsColumns,
    position: usize,
) -> Option<StandingsEntry> {
    // Display name keeps the standings page's exact casing and punctuation
    let display_name = cells.get(columns.player)?.clone();
    if display_name.is_empty() {
        return None;
    }

    let wins: u32 = cells.get(columns.wins)?.parse().ok()?;
    let losses: u32 = cells.get(columns.losses)?.parse().ok()?;
    let ties: u32 = cells.get(columns.ties)?.parse().ok()?;
    let tca: f64 = cells.get(columns.tca)?.parse().ok()?;
    let pcaa: f64 = cells.get(columns.pcaa)?.parse().ok()?;

    let rank = columns
        .rank
        .and_then(|slot| cells.get(slot))
        .filter(|text| !text.is_empty())
        .cloned()
        .unwrap_or_else(|| (position + 1).to_string());

    Some(StandingsEntry {
        record: format!("{}-{}-{}", wins, losses, ties),
        display_name,
        tca,
        pcaa,
        wins,
        losses,
        ties,
        rank,
    })
}
