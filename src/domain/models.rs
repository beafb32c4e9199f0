use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One competitor's line in the rundle standings table.
///
/// Text fields keep the standings page's casing and punctuation verbatim;
/// only whitespace is normalized. Immutable once parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub display_name: String,
    pub tca: f64,
    pub pcaa: f64,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    /// "{W}-{L}-{T}", composed at parse time
    pub record: String,
    pub rank: String,
}

impl StandingsEntry {
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

/// Display-name lookup over standings entries.
///
/// Keys are unique (a duplicate name overwrites the earlier entry in place)
/// and iteration follows insertion order, which the truncation-tolerant
/// matcher relies on as its tie-break.
#[derive(Debug, Default)]
pub struct StandingsIndex {
    entries: Vec<StandingsEntry>,
    by_name: HashMap<String, usize>,
}

impl StandingsIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: StandingsEntry) {
        match self.by_name.get(&entry.display_name) {
            Some(&slot) => self.entries[slot] = entry,
            None => {
                self.by_name
                    .insert(entry.display_name.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, display_name: &str) -> Option<&StandingsEntry> {
        self.by_name
            .get(display_name)
            .map(|&slot| &self.entries[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &StandingsEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The calling competitor's own season statistics, read from their profile
/// page. Never looked up in the standings index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SubjectStats {
    pub tca: f64,
    pub pcaa: f64,
}

/// One row lifted out of the results table. Cell texts are whitespace
/// normalized; `row` is the opaque handle callers use to apply fill
/// instructions back to their own row representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRow {
    pub row: usize,
    pub match_day_text: String,
    pub opponent_display: String,
    pub result_text: String,
    pub record_text: String,
    pub rank_text: String,
}

impl ResultRow {
    pub fn result_blank(&self) -> bool {
        self.result_text.is_empty()
    }

    pub fn record_blank(&self) -> bool {
        self.record_text.is_empty()
    }

    pub fn rank_blank(&self) -> bool {
        self.rank_text.is_empty()
    }
}

/// Background split for a filled result cell: two adjacent half-width color
/// fields at 15% opacity. Both halves inactive means no coloring at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfShade {
    pub left_red: bool,
    pub right_green: bool,
}

/// What to write back into one result row. Fields stay `None` for columns
/// that were already populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillInstruction {
    pub row: usize,
    pub result_text: Option<String>,
    pub tooltip_text: Option<String>,
    pub shade: Option<HalfShade>,
    pub record_text: Option<String>,
    pub rank_text: Option<String>,
}

impl FillInstruction {
    pub fn for_row(row: usize) -> Self {
        Self {
            row,
            result_text: None,
            tooltip_text: None,
            shade: None,
            record_text: None,
            rank_text: None,
        }
    }
}

/// Outcome of one reconciliation: the rows as read plus the instructions
/// produced for them.
#[derive(Debug, Serialize)]
pub struct FillReport {
    pub rows: Vec<ResultRow>,
    pub instructions: Vec<FillInstruction>,
}

impl FillReport {
    pub fn filled_rows(&self) -> usize {
        self.instructions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, rank: &str) -> StandingsEntry {
        StandingsEntry {
            display_name: name.to_string(),
            tca: 5.0,
            pcaa: 1.0,
            wins: 1,
            losses: 2,
            ties: 0,
            record: "1-2-0".to_string(),
            rank: rank.to_string(),
        }
    }

    #[test]
    fn duplicate_names_overwrite_in_place() {
        let mut index = StandingsIndex::new();
        index.insert(entry("Doe, Jane", "1"));
        index.insert(entry("Roe, Rick", "2"));
        index.insert(entry("Doe, Jane", "9"));

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("Doe, Jane").unwrap().rank, "9");

        // Overwriting keeps the original insertion position
        let names: Vec<&str> = index.iter().map(|e| e.display_name.as_str()).collect();
        assert_eq!(names, vec!["Doe, Jane", "Roe, Rick"]);
    }

    #[test]
    fn games_played_sums_record() {
        let e = entry("Doe, Jane", "1");
        assert_eq!(e.games_played(), 3);
    }
}
