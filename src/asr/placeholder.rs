//! Placeholder recognizer — fabricates a transcript from the target text.
//!
//! Wiring up a real cloud ASR backend means signing requests (TC3-HMAC-SHA256
//! for Tencent Cloud), injecting `SECRET_ID`/`SECRET_KEY` via configuration,
//! and uploading large recordings to object storage first.  None of that is
//! needed to develop the practice flow, so this backend returns the practice
//! target with its last character perturbed — a transcript that is *almost*
//! right, which makes the scoring output visible and non-trivial in demos.

use async_trait::async_trait;

use crate::asr::recognizer::{AsrError, Recognition, RecognizeOptions, Recognizer};

/// Transcript used when the request carries no target text.
const FALLBACK_PHRASE: &str = "こんにちは 世界";

/// Confidence reported for every fabricated transcript.
const MOCK_CONFIDENCE: f64 = 0.6;

// ---------------------------------------------------------------------------
// PlaceholderRecognizer
// ---------------------------------------------------------------------------

/// Stand-in for a cloud ASR backend.
///
/// Deterministic and dependency-free: the "transcript" is the target text
/// with its final character perturbed (a closing `。` becomes `!`, any other
/// final character gains a trailing `~`).
#[derive(Debug, Default)]
pub struct PlaceholderRecognizer;

impl PlaceholderRecognizer {
    pub fn new() -> Self {
        Self
    }

    /// Perturb the final character of `text`.
    ///
    /// Empty input stays empty.
    fn perturb(text: &str) -> String {
        let mut chars: Vec<char> = text.chars().collect();
        match chars.pop() {
            None => String::new(),
            Some('。') => {
                chars.push('!');
                chars.into_iter().collect()
            }
            Some(last) => {
                chars.push(last);
                chars.push('~');
                chars.into_iter().collect()
            }
        }
    }
}

#[async_trait]
impl Recognizer for PlaceholderRecognizer {
    async fn recognize(
        &self,
        audio: &[u8],
        opts: &RecognizeOptions,
    ) -> Result<Recognition, AsrError> {
        if audio.is_empty() {
            return Err(AsrError::EmptyAudio);
        }

        let base = opts.target_text.as_deref().unwrap_or(FALLBACK_PHRASE);
        log::debug!(
            "placeholder asr: lang={} target_len={} audio_bytes={}",
            opts.lang,
            base.chars().count(),
            audio.len()
        );

        Ok(Recognition {
            text: Self::perturb(base),
            confidence: MOCK_CONFIDENCE,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn opts_with_target(target: &str) -> RecognizeOptions {
        RecognizeOptions {
            target_text: Some(target.to_string()),
            ..RecognizeOptions::default()
        }
    }

    #[tokio::test]
    async fn perturbs_last_character_with_tilde() {
        let recognizer = PlaceholderRecognizer::new();
        let result = recognizer
            .recognize(b"audio", &opts_with_target("おはよう"))
            .await
            .unwrap();
        assert_eq!(result.text, "おはよう~");
        assert_eq!(result.confidence, MOCK_CONFIDENCE);
    }

    #[tokio::test]
    async fn full_stop_becomes_exclamation() {
        let recognizer = PlaceholderRecognizer::new();
        let result = recognizer
            .recognize(b"audio", &opts_with_target("これはペンです。"))
            .await
            .unwrap();
        assert_eq!(result.text, "これはペンです!");
    }

    #[tokio::test]
    async fn missing_target_falls_back_to_canned_phrase() {
        let recognizer = PlaceholderRecognizer::new();
        let result = recognizer
            .recognize(b"audio", &RecognizeOptions::default())
            .await
            .unwrap();
        assert_eq!(result.text, format!("{}~", FALLBACK_PHRASE));
    }

    #[tokio::test]
    async fn empty_audio_is_rejected() {
        let recognizer = PlaceholderRecognizer::new();
        let err = recognizer
            .recognize(b"", &opts_with_target("おはよう"))
            .await
            .unwrap_err();
        assert!(matches!(err, AsrError::EmptyAudio));
    }

    #[test]
    fn perturb_of_empty_target_is_empty() {
        assert_eq!(PlaceholderRecognizer::perturb(""), "");
    }

    #[test]
    fn perturbed_text_scores_high_but_not_perfect() {
        // The fabricated transcript should land near — not on — a perfect
        // score, so the scoring pipeline has something to show.
        let perturbed = PlaceholderRecognizer::perturb("これは ペン です");
        let score = crate::score::score_utterance("これは ペン です", &perturbed);
        assert!(score.error_rate > 0.0);
        assert!(score.error_rate < 1.0);
    }
}
