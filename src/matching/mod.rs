use crate::domain::{StandingsEntry, StandingsIndex};

type Strategy = for<'a> fn(&str, &'a StandingsIndex) -> Option<&'a StandingsEntry>;

/// Ordered resolution passes; the first that returns an entry wins. New
/// passes append here without touching call sites.
const STRATEGIES: &[Strategy] = &[exact, truncated_prefix];

/// Resolve a results-table opponent name against the standings index.
pub fn resolve<'a>(opponent: &str, index: &'a StandingsIndex) -> Option<&'a StandingsEntry> {
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(opponent, index))
}

fn exact<'a>(opponent: &str, index: &'a StandingsIndex) -> Option<&'a StandingsEntry> {
    index.get(opponent)
}

/// Truncation-tolerant pass. The source site shortens long names to a fixed
/// character budget with a trailing period, on either page, so a match is a
/// prefix-equality check in either direction against the text before the
/// first period. Iterates in index insertion order; the first qualifying
/// key wins.
fn truncated_prefix<'a>(opponent: &str, index: &'a StandingsIndex) -> Option<&'a StandingsEntry> {
    let opp_prefix = slice_before_dot(opponent);

    index.iter().find(|entry| {
        let key = entry.display_name.as_str();
        let key_prefix = slice_before_dot(key);
        (!key_prefix.is_empty() && opponent.starts_with(key_prefix))
            || (!opp_prefix.is_empty() && key.starts_with(opp_prefix))
    })
}

fn slice_before_dot(s: &str) -> &str {
    match s.find('.') {
        Some(position) => &s[..position],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, rank: &str) -> StandingsEntry {
        StandingsEntry {
            display_name: name.to_string(),
            tca: 4.0,
            pcaa: 1.5,
            wins: 2,
            losses: 1,
            ties: 0,
            record: "2-1-0".to_string(),
            rank: rank.to_string(),
        }
    }

    fn index_of(names: &[&str]) -> StandingsIndex {
        let mut index = StandingsIndex::new();
        for (i, name) in names.iter().enumerate() {
            index.insert(entry(name, &(i + 1).to_string()));
        }
        index
    }

    #[test]
    fn exact_match_takes_precedence_over_truncation() {
        // "Smith, Jo." would also qualify under the truncation pass
        let index = index_of(&["Smith, Jo.", "Smith, John"]);

        let found = resolve("Smith, John", &index).unwrap();
        assert_eq!(found.display_name, "Smith, John");
    }

    #[test]
    fn truncated_standings_key_matches_full_results_name() {
        let index = index_of(&["Smith, Jo."]);

        let found = resolve("Smith, John", &index).unwrap();
        assert_eq!(found.display_name, "Smith, Jo.");
    }

    #[test]
    fn truncated_results_name_matches_full_standings_key() {
        let index = index_of(&["Smith, John"]);

        let found = resolve("Smith, Jo.", &index).unwrap();
        assert_eq!(found.display_name, "Smith, John");
    }

    #[test]
    fn unrelated_names_sharing_one_letter_do_not_match() {
        let index = index_of(&["Alvarez, Bo"]);
        assert!(resolve("Adams, Cy", &index).is_none());
    }

    #[test]
    fn insertion_order_breaks_ties() {
        // Both keys qualify for "Smith, J."; the first inserted wins
        let index = index_of(&["Smith, Jane", "Smith, John"]);

        let found = resolve("Smith, J.", &index).unwrap();
        assert_eq!(found.display_name, "Smith, Jane");
    }

    #[test]
    fn no_match_returns_none() {
        let index = index_of(&["Doe, Jane"]);
        assert!(resolve("Zimmer, Hans", &index).is_none());
    }
}
