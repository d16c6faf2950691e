//! TTS (text-to-speech) module.
//!
//! [`Synthesizer`] mirrors the [`Recognizer`](crate::asr::Recognizer) seam
//! on the output side: the HTTP layer asks for an audio URL for a piece of
//! practice text and never cares who produced it.  The shipped
//! [`PlaceholderSynthesizer`] returns a fixed sample URL so the player flow
//! can be exercised without a cloud TTS account; [`storage`] holds the
//! even-dumber fallback URL the `/tts` route serves when synthesis fails.

pub mod storage;
pub mod synthesizer;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use storage::mock_audio_url;
pub use synthesizer::{PlaceholderSynthesizer, SynthesisOptions, Synthesizer, TtsError};
