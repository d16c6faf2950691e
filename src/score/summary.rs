//! Composed scoring entry points for the two practice modes.
//!
//! * [`score_utterance`] — sentence shadowing: word-level WER over raw
//!   (untrimmed, internally spaced) text.
//! * [`compute_quiz_score`] — kana quiz: character-level distance over
//!   [`normalize`](crate::score::normalize)d input.
//!
//! The asymmetry is deliberate: a single romaji answer has no word
//! boundaries worth keeping, while a sentence is compared word by word and
//! must keep its internal spacing.  Both paths map through the same star
//! thresholds.

use serde::{Deserialize, Serialize};

use crate::score::distance::edit_distance;
use crate::score::normalize::normalize;
use crate::score::rating::stars_from_error_rate;
use crate::score::wer::word_error_rate;

// ---------------------------------------------------------------------------
// UtteranceScore
// ---------------------------------------------------------------------------

/// Result of scoring a spoken utterance against its reference text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtteranceScore {
    /// Word error rate in `[0, 1]`.
    pub error_rate: f64,
    /// Star rating derived from `error_rate`.
    pub stars: u8,
    /// `1 − error_rate`, ready for percentage display.
    pub normalized_score: f64,
}

/// Score a recognition `hypothesis` against the `reference` sentence.
///
/// Never fails: empty inputs are absorbed by the WER zero-division guard.
///
/// # Example
/// ```rust
/// use kana_coach::score::score_utterance;
///
/// let score = score_utterance("おはよう", "おはよう");
/// assert_eq!(score.error_rate, 0.0);
/// assert_eq!(score.stars, 5);
/// assert_eq!(score.normalized_score, 1.0);
/// ```
pub fn score_utterance(reference: &str, hypothesis: &str) -> UtteranceScore {
    let error_rate = word_error_rate(reference, hypothesis);
    UtteranceScore {
        error_rate,
        stars: stars_from_error_rate(error_rate),
        normalized_score: 1.0 - error_rate,
    }
}

// ---------------------------------------------------------------------------
// QuizScore
// ---------------------------------------------------------------------------

/// Result of scoring a typed quiz answer against the expected romaji.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuizScore {
    /// `1 − error_rate`, in `[0, 1]`.
    pub accuracy: f64,
    /// Star rating derived from the error rate.
    pub stars: u8,
    /// Raw character-level edit distance between the normalised strings.
    pub distance: usize,
}

/// Score a typed `actual` answer against the `expected` romaji/syllable.
///
/// Both inputs are normalised (lower-cased, whitespace stripped) before the
/// character-level comparison.  An empty expected answer is only "matched"
/// by an empty actual answer; the distance is reported as 0 in both
/// empty-expected branches since there is nothing to measure against.
///
/// # Example
/// ```rust
/// use kana_coach::score::compute_quiz_score;
///
/// let score = compute_quiz_score("KA NA", "kana");
/// assert_eq!(score.distance, 0);
/// assert_eq!(score.stars, 5);
/// ```
pub fn compute_quiz_score(expected: &str, actual: &str) -> QuizScore {
    let expected = normalize(expected);
    let actual = normalize(actual);

    if expected.is_empty() {
        return if actual.is_empty() {
            QuizScore {
                accuracy: 1.0,
                stars: 5,
                distance: 0,
            }
        } else {
            QuizScore {
                accuracy: 0.0,
                stars: 0,
                distance: 0,
            }
        };
    }

    let expected_chars: Vec<char> = expected.chars().collect();
    let actual_chars: Vec<char> = actual.chars().collect();

    let distance = edit_distance(&expected_chars, &actual_chars);
    let error_rate = (distance as f64 / expected_chars.len() as f64).min(1.0);

    QuizScore {
        accuracy: (1.0 - error_rate).max(0.0),
        stars: stars_from_error_rate(error_rate),
        distance,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- score_utterance ---

    #[test]
    fn perfect_utterance_scores_full_marks() {
        let score = score_utterance("おはよう", "おはよう");
        assert_eq!(score.error_rate, 0.0);
        assert_eq!(score.stars, 5);
        assert_eq!(score.normalized_score, 1.0);
    }

    #[test]
    fn normalized_score_is_exactly_one_minus_error_rate() {
        let cases = [
            ("これは ペン です", "これは ペン"),
            ("a b c d", "a x c"),
            ("", "noise"),
            ("hello", ""),
        ];
        for (reference, hypothesis) in cases {
            let score = score_utterance(reference, hypothesis);
            assert_eq!(score.normalized_score, 1.0 - score.error_rate);
        }
    }

    #[test]
    fn empty_reference_with_noise_is_zero_stars() {
        let score = score_utterance("", "noise");
        assert_eq!(score.error_rate, 1.0);
        assert_eq!(score.stars, 0);
        assert_eq!(score.normalized_score, 0.0);
    }

    #[test]
    fn one_wrong_word_out_of_three_gives_three_stars() {
        // error rate 1/3 ≈ 0.333 → 3 stars
        let score = score_utterance("これは ペン です", "これは えんぴつ です");
        assert_eq!(score.stars, 3);
    }

    // --- compute_quiz_score ---

    #[test]
    fn exact_answer_is_perfect() {
        let score = compute_quiz_score("kana", "kana");
        assert_eq!(score.accuracy, 1.0);
        assert_eq!(score.stars, 5);
        assert_eq!(score.distance, 0);
    }

    #[test]
    fn case_and_spacing_do_not_matter() {
        let score = compute_quiz_score("KA NA", " kana ");
        assert_eq!(score.distance, 0);
        assert_eq!(score.stars, 5);
    }

    #[test]
    fn empty_actual_against_real_answer_is_full_mismatch() {
        let score = compute_quiz_score("kana", "");
        assert_eq!(score.accuracy, 0.0);
        assert_eq!(score.stars, 0);
        assert_eq!(score.distance, 0);
    }

    #[test]
    fn empty_expected_matched_only_by_empty_actual() {
        let both_empty = compute_quiz_score("", "");
        assert_eq!(both_empty.accuracy, 1.0);
        assert_eq!(both_empty.stars, 5);
        assert_eq!(both_empty.distance, 0);

        let noise = compute_quiz_score("", "x");
        assert_eq!(noise.accuracy, 0.0);
        assert_eq!(noise.stars, 0);
        assert_eq!(noise.distance, 0);
    }

    #[test]
    fn accuracy_is_bounded_even_for_long_wrong_answers() {
        let score = compute_quiz_score("a", "completely wrong answer");
        assert_eq!(score.accuracy, 0.0);
        assert_eq!(score.stars, 0);
    }

    #[test]
    fn one_char_off_in_four_gives_four_stars() {
        // distance 1 / length 4 = 0.25 → 4 stars
        let score = compute_quiz_score("kana", "kama");
        assert_eq!(score.distance, 1);
        assert_eq!(score.stars, 4);
        assert!((score.accuracy - 0.75).abs() < 1e-12);
    }

    // --- cross-consistency ---

    #[test]
    fn both_entry_points_share_star_thresholds() {
        // Same error rate (1/4 = 0.25) through either path → same stars.
        let quiz = compute_quiz_score("kana", "kama");
        let utterance = score_utterance("a b c d", "a b c x");
        assert_eq!(quiz.stars, utterance.stars);
        assert_eq!(quiz.stars, 4);
    }
}
