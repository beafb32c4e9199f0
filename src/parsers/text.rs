/// Collapse whitespace runs to single spaces and trim the ends.
///
/// `char::is_whitespace` covers U+00A0, so the non-breaking spaces the
/// source site pads cells with collapse like ordinary spaces.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized, uppercased form used for header and name comparisons.
/// Never used when producing output text.
pub fn to_comparable(text: &str) -> String {
    normalize(text).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs_and_trims() {
        assert_eq!(normalize("  Match\t Day \n 3  "), "Match Day 3");
    }

    #[test]
    fn non_breaking_spaces_normalize_like_ordinary_ones() {
        assert_eq!(normalize("Doe,\u{00A0}\u{00A0}Jane"), normalize("Doe,  Jane"));
    }

    #[test]
    fn empty_input_yields_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\u{00A0} \t"), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = ["", " a  b ", "x\u{00A0}y", "already normal"];
        for s in samples {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }

    #[test]
    fn comparable_uppercases_after_normalizing() {
        assert_eq!(to_comparable("  match day "), "MATCH DAY");
    }
}
