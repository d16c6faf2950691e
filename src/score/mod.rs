//! Pronunciation scoring module.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    score (pure)                      │
//! │                                                      │
//! │   ┌────────────┐         ┌──────────────┐            │
//! │   │ normalize  │         │     wer      │            │
//! │   │ case-fold  │         │ word tokens  │            │
//! │   │ strip ws   │         │ → error rate │            │
//! │   └─────┬──────┘         └──────┬───────┘            │
//! │         │     ┌──────────────┐  │                    │
//! │         └────▶│   distance   │◀─┘                    │
//! │               │ Levenshtein  │                       │
//! │               └──────┬───────┘                       │
//! │                      ▼                               │
//! │               ┌──────────────┐                       │
//! │               │    rating    │                       │
//! │               │ rate → stars │                       │
//! │               └──────┬───────┘                       │
//! │                      ▼                               │
//! │     score_utterance() / compute_quiz_score()         │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is synchronous, deterministic and total: arbitrary
//! strings (including empty ones) are valid input and nothing can fail.
//! The HTTP handlers and the quiz flow both call into this one module so the
//! server-evaluated and client-evaluated scores can never drift apart.
//!
//! # Quick start
//!
//! ```rust
//! use kana_coach::score::{compute_quiz_score, score_utterance};
//!
//! let spoken = score_utterance("これは ペン です", "これは ペン です");
//! assert_eq!(spoken.stars, 5);
//!
//! let typed = compute_quiz_score("shi", "si");
//! assert_eq!(typed.distance, 1);
//! ```

pub mod distance;
pub mod normalize;
pub mod rating;
pub mod summary;
pub mod wer;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use distance::{edit_distance, levenshtein};
pub use normalize::normalize;
pub use rating::stars_from_error_rate;
pub use summary::{compute_quiz_score, score_utterance, QuizScore, UtteranceScore};
pub use wer::word_error_rate;
