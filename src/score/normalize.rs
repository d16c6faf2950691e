//! Input canonicalisation for character-level comparison.

/// Lower-case `input` and remove all whitespace.
///
/// Used by the short-token (romaji/syllable) quiz path only.  Sentence
/// scoring keeps its spacing — words are the comparison unit there, so
/// stripping spaces would destroy the token boundaries.
///
/// # Example
/// ```rust
/// use kana_coach::score::normalize;
///
/// assert_eq!(normalize("  Ka Na  "), "kana");
/// ```
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_ascii() {
        assert_eq!(normalize("KANA"), "kana");
        assert_eq!(normalize("OhaYou"), "ohayou");
    }

    #[test]
    fn strips_all_whitespace_runs() {
        assert_eq!(normalize(" ka  na "), "kana");
        assert_eq!(normalize("ka\tna\n"), "kana");
        // Ideographic space (U+3000), common in Japanese input methods.
        assert_eq!(normalize("か\u{3000}な"), "かな");
    }

    #[test]
    fn empty_and_whitespace_only_become_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n"), "");
    }

    #[test]
    fn kana_passes_through_unchanged() {
        assert_eq!(normalize("おはよう"), "おはよう");
    }
}
