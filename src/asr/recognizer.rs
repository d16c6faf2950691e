//! Core [`Recognizer`] trait, request/response types and errors.

use async_trait::async_trait;
use thiserror::Error;

// ---------------------------------------------------------------------------
// AsrError
// ---------------------------------------------------------------------------

/// All errors that can arise from the ASR subsystem.
#[derive(Debug, Clone, Error)]
pub enum AsrError {
    /// The uploaded audio buffer was empty.
    #[error("audio buffer is empty")]
    EmptyAudio,

    /// The recognition backend failed (network, auth, quota, …).
    #[error("recognition backend failed: {0}")]
    Backend(String),
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Per-request recognition parameters.
#[derive(Debug, Clone)]
pub struct RecognizeOptions {
    /// BCP-47 language tag, e.g. `"ja-JP"`.
    pub lang: String,
    /// The practice target text, when known.  Placeholder backends use it to
    /// fabricate a plausible transcript; a real backend may use it as a bias
    /// hint or ignore it.
    pub target_text: Option<String>,
}

impl Default for RecognizeOptions {
    fn default() -> Self {
        Self {
            lang: "ja-JP".into(),
            target_text: None,
        }
    }
}

/// A recognition result: the transcript plus the backend's confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    /// Recognised text.
    pub text: String,
    /// Backend confidence in `[0, 1]`.
    pub confidence: f64,
}

// ---------------------------------------------------------------------------
// Recognizer trait
// ---------------------------------------------------------------------------

/// Object-safe, thread-safe interface for speech-to-text backends.
///
/// Implementations must be `Send + Sync` so they can be held behind an
/// `Arc<dyn Recognizer>` and called from any HTTP worker.
///
/// # Contract
///
/// - `audio` is the raw uploaded recording (format is backend-defined; the
///   placeholder never inspects it).
/// - Returns `Err(AsrError::EmptyAudio)` when `audio` is empty.
#[async_trait]
pub trait Recognizer: Send + Sync {
    /// Recognise `audio` and return the transcript with confidence.
    async fn recognize(
        &self,
        audio: &[u8],
        opts: &RecognizeOptions,
    ) -> Result<Recognition, AsrError>;
}

// Compile-time assertion: Box<dyn Recognizer> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn Recognizer>) {}
};

// ---------------------------------------------------------------------------
// MockRecognizer  (test-only)
// ---------------------------------------------------------------------------

/// A test double that returns a pre-configured response without touching any
/// backend.
#[cfg(test)]
pub struct MockRecognizer {
    response: Result<Recognition, AsrError>,
}

#[cfg(test)]
impl MockRecognizer {
    /// Create a mock that always returns `Ok` with `text` and `confidence`.
    pub fn ok(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            response: Ok(Recognition {
                text: text.into(),
                confidence,
            }),
        }
    }

    /// Create a mock that always returns `Err(error)`.
    pub fn err(error: AsrError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl Recognizer for MockRecognizer {
    async fn recognize(
        &self,
        audio: &[u8],
        _opts: &RecognizeOptions,
    ) -> Result<Recognition, AsrError> {
        // Enforce the empty-audio contract even in the mock so callers are
        // tested against it.
        if audio.is_empty() {
            return Err(AsrError::EmptyAudio);
        }
        self.response.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
