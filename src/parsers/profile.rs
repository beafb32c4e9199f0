use anyhow::{Result, anyhow};
use scraper::{ElementRef, Html, Selector};

use crate::domain::SubjectStats;
use crate::errors::parse_context;
use crate::parsers::tables::{self, HeaderMatch};

const SEASON_SELECTOR: &str = "table.std, table.std.std_bord";
const REQUIRED_HEADERS: &[&str] = &["W", "L", "T", "PTS", "TMP", "TCA", "PCAA", "RANK"];
const STANDINGS_ANCHOR: &str = "a[href*='standings.php']";

/// Subject data lifted from the profile's current-season table: where the
/// rundle standings live plus the competitor's own scoring stats.
#[derive(Debug, Clone)]
pub struct SeasonData {
    pub standings_href: String,
    pub subject: SubjectStats,
}

pub fn find_current_season_table(doc: &Html) -> Option<ElementRef<'_>> {
    tables::locate_table(
        doc,
        SEASON_SELECTOR,
        REQUIRED_HEADERS,
        HeaderMatch::ExactTokens,
    )
}

/// Read the rundle standings link and the subject's TCA/PCAA from the first
/// body row of the current-season table. Any missing piece is a discovery
/// failure for the whole invocation.
pub fn extract_season_data(doc: &Html) -> Result<SeasonData> {
    let table = find_current_season_table(doc)
        .ok_or_else(|| anyhow!(parse_context("current-season table")))?;

    let tca_col = tables::header_index_of(&table, "TCA")
        .ok_or_else(|| anyhow!(parse_context("current-season TCA column")))?;
    let pcaa_col = tables::header_index_of(&table, "PCAA")
        .ok_or_else(|| anyhow!(parse_context("current-season PCAA column")))?;

    let rows = tables::body_rows(&table);
    let first_row = rows
        .first()
        .ok_or_else(|| anyhow!(parse_context("current-season row")))?;
    let cells = tables::row_cell_texts(first_row);

    let standings_href =
        standings_link(first_row).ok_or_else(|| anyhow!(parse_context("rundle standings link")))?;
    let tca =
        parse_stat(&cells, tca_col).ok_or_else(|| anyhow!(parse_context("subject TCA value")))?;
    let pcaa =
        parse_stat(&cells, pcaa_col).ok_or_else(|| anyhow!(parse_context("subject PCAA value")))?;

    Ok(SeasonData {
        standings_href,
        subject: SubjectStats { tca, pcaa },
    })
}

fn parse_stat(cells: &[String], slot: usize) -> Option<f64> {
    cells.get(slot)?.parse().ok()
}

/// The rundle link sits in the row's first cell.
fn standings_link(row: &ElementRef) -> Option<String> {
    let cells = Selector::parse("td").expect("valid CSS selector");
    let anchor = Selector::parse(STANDINGS_ANCHOR).expect("valid CSS selector");

    let first_cell = row.select(&cells).next()?;
    first_cell
        .select(&anchor)
        .next()?
        .value()
        .attr("href")
        .map(str::to_string)
}
