use scraper::{ElementRef, Html, Selector};

use crate::parsers::text::{normalize, to_comparable};

/// How required header tokens are tested against a table's header cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMatch {
    /// Every token must equal some header cell exactly
    ExactTokens,
    /// Every token must appear as a substring of some header cell
    Substring,
}

/// Find the first table (in document order) among `selectors` whose header
/// row satisfies `required` under `mode`. Tables without a header row are
/// skipped, not failures.
pub fn locate_table<'a>(
    doc: &'a Html,
    selectors: &str,
    required: &[&str],
    mode: HeaderMatch,
) -> Option<ElementRef<'a>> {
    let tables = selector(selectors);
    doc.select(&tables).find(|table| match header_texts(table) {
        Some(headers) => satisfies(&headers, required, mode),
        None => false,
    })
}

/// Comparable texts of a table's header-row cells, or `None` when the table
/// has no header row (or an empty one).
pub fn header_texts(table: &ElementRef) -> Option<Vec<String>> {
    let header_row = table.select(&selector("thead tr")).next()?;
    let cells: Vec<String> = header_row
        .select(&selector("td, th"))
        .map(|cell| to_comparable(&cell_text(&cell)))
        .collect();
    if cells.is_empty() { None } else { Some(cells) }
}

/// Position of the header cell exactly equal to `token` (comparable form).
pub fn header_index_of(table: &ElementRef, token: &str) -> Option<usize> {
    header_texts(table)?.iter().position(|h| h.as_str() == token)
}

/// Body rows of a table, document order.
pub fn body_rows<'a>(table: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    table.select(&selector("tbody tr")).collect()
}

/// Normalized texts of a row's data cells.
pub fn row_cell_texts(row: &ElementRef) -> Vec<String> {
    row.select(&selector("td"))
        .map(|cell| normalize(&cell_text(&cell)))
        .collect()
}

/// Concatenated descendant text of an element.
pub fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect()
}

fn satisfies(headers: &[String], required: &[&str], mode: HeaderMatch) -> bool {
    match mode {
        HeaderMatch::ExactTokens => required
            .iter()
            .all(|token| headers.iter().any(|h| h.as_str() == *token)),
        HeaderMatch::Substring => required
            .iter()
            .all(|token| headers.iter().any(|h| h.contains(token))),
    }
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid CSS selector")
}
