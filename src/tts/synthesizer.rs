//! Core [`Synthesizer`] trait and the placeholder implementation.
//!
//! A production backend would sign a request to a cloud TTS endpoint, write
//! the returned audio to object storage and hand back a short-lived CDN URL.
//! The placeholder skips all of it and returns one fixed sample URL.

use async_trait::async_trait;
use thiserror::Error;

// ---------------------------------------------------------------------------
// TtsError
// ---------------------------------------------------------------------------

/// All errors that can arise from the TTS subsystem.
#[derive(Debug, Clone, Error)]
pub enum TtsError {
    /// The text to synthesise was empty or whitespace-only.
    #[error("text to synthesise is empty")]
    EmptyText,

    /// The synthesis backend failed (network, auth, quota, …).
    #[error("synthesis backend failed: {0}")]
    Backend(String),
}

// ---------------------------------------------------------------------------
// SynthesisOptions
// ---------------------------------------------------------------------------

/// Per-request synthesis parameters.
///
/// `voice_id` and `speed` follow the cloud-provider conventions the original
/// deployment targeted: an integer voice catalogue id and a speed factor in
/// roughly `-2.0..=2.0`.  The placeholder only logs them.
#[derive(Debug, Clone, Default)]
pub struct SynthesisOptions {
    /// Voice catalogue id, backend-defined.
    pub voice_id: Option<i64>,
    /// Speaking-speed factor, backend-defined.
    pub speed: Option<f64>,
    /// BCP-47 language tag, e.g. `"ja-JP"`.
    pub lang: Option<String>,
}

// ---------------------------------------------------------------------------
// Synthesizer trait
// ---------------------------------------------------------------------------

/// Object-safe, thread-safe interface for text-to-speech backends.
///
/// Returns a playable audio URL for `text`.
///
/// # Contract
///
/// - Returns `Err(TtsError::EmptyText)` when `text` is empty after trimming.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Synthesise `text` and return an audio URL.
    async fn synthesize(&self, text: &str, opts: &SynthesisOptions) -> Result<String, TtsError>;
}

const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn Synthesizer>) {}
};

// ---------------------------------------------------------------------------
// PlaceholderSynthesizer
// ---------------------------------------------------------------------------

/// URL returned for every synthesis request.
const MOCK_TTS_URL: &str = "https://example.com/mock-tts.mp3";

/// Stand-in for a cloud TTS backend — logs the request and returns a fixed
/// sample URL the frontend can actually play.
#[derive(Debug, Default)]
pub struct PlaceholderSynthesizer;

impl PlaceholderSynthesizer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Synthesizer for PlaceholderSynthesizer {
    async fn synthesize(&self, text: &str, opts: &SynthesisOptions) -> Result<String, TtsError> {
        if text.trim().is_empty() {
            return Err(TtsError::EmptyText);
        }

        log::info!(
            "placeholder tts: text_len={} voice_id={:?} speed={:?} lang={:?}",
            text.chars().count(),
            opts.voice_id,
            opts.speed,
            opts.lang
        );

        Ok(MOCK_TTS_URL.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
