//! Client toolkit for the practice app.
//!
//! Everything a frontend needs that is not UI: [`CoachClient`] wraps the
//! server API behind explicit configuration, [`deck`] carries the built-in
//! gojūon card catalogue, and [`QuizSession`] drives a kana quiz round using
//! the same [`score`](crate::score) functions the server uses — so a star
//! rating means the same thing whichever side computed it.

pub mod api;
pub mod deck;
pub mod quiz;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use api::{AsrResponse, ClientError, CoachClient, TtsOptions};
pub use deck::{KanaCard, GOJUON};
pub use quiz::{QuizOutcome, QuizSession};
