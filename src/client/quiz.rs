//! Kana quiz round — question sequencing and local scoring.
//!
//! The quiz never talks to the server: answers are typed, so scoring runs
//! locally through [`compute_quiz_score`].  The session is a plain state
//! machine a UI can drive one `submit` at a time.

use rand::seq::SliceRandom;

use crate::client::deck::{KanaCard, GOJUON};
use crate::progress::ProgressEntry;
use crate::score::compute_quiz_score;

// ---------------------------------------------------------------------------
// QuizOutcome
// ---------------------------------------------------------------------------

/// One answered question with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizOutcome {
    /// The kana that was shown.
    pub kana: String,
    /// The expected romaji answer.
    pub romaji: String,
    /// What the learner typed.
    pub answer: String,
    /// Accuracy in `[0, 1]`.
    pub accuracy: f64,
    /// Star rating (0–5).
    pub stars: u8,
    /// Character-level edit distance between normalised strings.
    pub distance: usize,
}

impl QuizOutcome {
    /// Convert to the wire record `POST /progress` accepts.
    pub fn to_progress_entry(&self) -> ProgressEntry {
        ProgressEntry {
            kind: "kana-quiz".into(),
            label: self.kana.clone(),
            stars: self.stars,
            accuracy: self.accuracy,
        }
    }
}

// ---------------------------------------------------------------------------
// QuizSession
// ---------------------------------------------------------------------------

/// A quiz round over a fixed list of questions.
///
/// # Example
/// ```rust
/// use kana_coach::client::{KanaCard, QuizSession};
///
/// let mut session = QuizSession::new(vec![
///     KanaCard { kana: "か", romaji: "ka" },
///     KanaCard { kana: "し", romaji: "shi" },
/// ]);
///
/// let outcome = session.submit("ka").unwrap();
/// assert_eq!(outcome.stars, 5);
///
/// session.submit("si");
/// assert!(session.is_finished());
/// ```
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<KanaCard>,
    index: usize,
    results: Vec<QuizOutcome>,
}

impl QuizSession {
    /// Create a session over an explicit question list (deterministic —
    /// used by tests and by callers with their own card selection).
    pub fn new(questions: Vec<KanaCard>) -> Self {
        Self {
            questions,
            index: 0,
            results: Vec::new(),
        }
    }

    /// Create a session with `count` cards drawn randomly from the built-in
    /// gojūon deck.  Asking for more cards than the deck holds yields the
    /// whole deck in random order.
    pub fn with_random_questions(count: usize) -> Self {
        let mut deck: Vec<KanaCard> = GOJUON.to_vec();
        deck.shuffle(&mut rand::thread_rng());
        deck.truncate(count);
        Self::new(deck)
    }

    /// The question currently awaiting an answer, or `None` once finished.
    pub fn current(&self) -> Option<&KanaCard> {
        self.questions.get(self.index)
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn answered(&self) -> usize {
        self.results.len()
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    /// Score `answer` against the current question and advance.
    ///
    /// Returns `None` when the session is already finished.
    pub fn submit(&mut self, answer: &str) -> Option<&QuizOutcome> {
        let card = self.questions.get(self.index)?;
        let score = compute_quiz_score(card.romaji, answer);

        self.results.push(QuizOutcome {
            kana: card.kana.to_string(),
            romaji: card.romaji.to_string(),
            answer: answer.to_string(),
            accuracy: score.accuracy,
            stars: score.stars,
            distance: score.distance,
        });
        self.index += 1;

        self.results.last()
    }

    /// All outcomes so far, in question order.
    pub fn results(&self) -> &[QuizOutcome] {
        &self.results
    }

    /// Mean accuracy over the answered questions (0.0 when none answered).
    pub fn mean_accuracy(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        self.results.iter().map(|r| r.accuracy).sum::<f64>() / self.results.len() as f64
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
