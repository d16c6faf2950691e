//! Word error rate — word-level edit distance normalised by reference length.

use crate::score::distance::edit_distance;

/// Word error rate between a reference text and a recognition hypothesis.
///
/// Both strings are tokenised on runs of whitespace (leading/trailing
/// whitespace ignored; an empty or blank string yields zero tokens, never a
/// single empty token).  The result is
/// `min(1, word_distance / reference_word_count)` — capped at 1 even when
/// the hypothesis is much longer than the reference.
///
/// An empty reference cannot normalise anything, so it scores `0.0` against
/// an empty hypothesis and `1.0` against anything else.
///
/// # Example
/// ```rust
/// use kana_coach::score::word_error_rate;
///
/// assert_eq!(word_error_rate("これは ペン です", "これは ペン です"), 0.0);
/// assert!(word_error_rate("これは ペン です", "これは ペン") > 0.0);
/// ```
pub fn word_error_rate(reference: &str, hypothesis: &str) -> f64 {
    let ref_words: Vec<&str> = reference.split_whitespace().collect();
    let hyp_words: Vec<&str> = hypothesis.split_whitespace().collect();

    if ref_words.is_empty() {
        return if hyp_words.is_empty() { 0.0 } else { 1.0 };
    }

    let distance = edit_distance(&ref_words, &hyp_words);
    (distance as f64 / ref_words.len() as f64).min(1.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_sentences_score_zero() {
        assert_eq!(word_error_rate("これは ペン です", "これは ペン です"), 0.0);
        assert_eq!(word_error_rate("hello world", "hello world"), 0.0);
    }

    #[test]
    fn missing_word_is_one_over_reference_length() {
        let rate = word_error_rate("これは ペン です", "これは ペン");
        assert!((rate - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn rate_stays_within_unit_interval() {
        let rate = word_error_rate("hello", "a b c d e f");
        assert_eq!(rate, 1.0);
    }

    #[test]
    fn empty_reference_guards() {
        assert_eq!(word_error_rate("", ""), 0.0);
        assert_eq!(word_error_rate("", "anything"), 1.0);
        assert_eq!(word_error_rate("   ", "anything"), 1.0);
        assert_eq!(word_error_rate("   ", "  \t "), 0.0);
    }

    #[test]
    fn empty_hypothesis_against_words_is_total_mismatch() {
        assert_eq!(word_error_rate("hello world", ""), 1.0);
    }

    #[test]
    fn leading_trailing_and_repeated_spaces_are_ignored() {
        assert_eq!(word_error_rate("  これは  ペン  です ", "これは ペン です"), 0.0);
    }

    #[test]
    fn substituted_word_counts_once() {
        let rate = word_error_rate("hello world", "hello there");
        assert!((rate - 0.5).abs() < 1e-12);
    }
}
