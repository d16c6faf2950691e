//! Kana Coach — pronunciation-practice scoring service and client toolkit.
//!
//! The crate is one library with two consumers built on top of it:
//!
//! * the **practice server** (`src/main.rs`) — mock ASR/TTS endpoints plus
//!   utterance scoring behind an HTTP API;
//! * the **client toolkit** ([`client`]) — a typed API wrapper and the local
//!   kana-quiz flow.
//!
//! Both consume the same [`score`] module, so the server-evaluated utterance
//! score and the client-evaluated quiz score share one set of algorithms and
//! star thresholds and can never drift apart.
//!
//! ```text
//!    client::quiz ──┐                     ┌── server::asr ── asr::Recognizer
//!                   ├──▶  score (pure) ◀──┤
//!    client::api ───┘                     └── server::tts ── tts::Synthesizer
//! ```

pub mod asr;
pub mod client;
pub mod config;
pub mod progress;
pub mod score;
pub mod server;
pub mod tts;
