//! `POST /asr/recognize` — audio upload, recognition and utterance scoring.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::asr::RecognizeOptions;
use crate::score::score_utterance;
use crate::server::AppState;

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

/// Successful recognition + scoring payload.
#[derive(Debug, Serialize)]
pub struct RecognizeResponse {
    /// Recognised transcript.
    pub text: String,
    /// Backend confidence in `[0, 1]`.
    pub confidence: f64,
    /// Normalised score (`1 − wer`).
    pub score: f64,
    /// Star rating (0–5).
    pub stars: u8,
    /// Word error rate in `[0, 1]`.
    pub wer: f64,
    /// The target text the client asked to be scored against.
    pub target: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: &'static str,
}

fn error_response(status: StatusCode, message: &'static str) -> Response {
    (status, Json(ErrorBody { message })).into_response()
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// Handle an audio upload and return the scored recognition result.
///
/// Multipart fields: `audio` (file, required), `target` (text, optional),
/// `lang` (text, optional — defaults from config).
///
/// When `target` is empty the transcript is scored against itself, which
/// degenerates to a perfect score; the behaviour is kept for wire-level
/// parity with the original API.
///
/// The recording is never persisted — it only exists in memory for the
/// duration of the request.
pub async fn recognize(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut audio: Option<Vec<u8>> = None;
    let mut target = String::new();
    let mut lang: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                log::warn!("asr: malformed multipart body: {e}");
                return error_response(StatusCode::BAD_REQUEST, "malformed multipart body");
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "audio" => match field.bytes().await {
                Ok(bytes) => audio = Some(bytes.to_vec()),
                Err(e) => {
                    log::warn!("asr: failed to read audio field: {e}");
                    return error_response(StatusCode::BAD_REQUEST, "malformed multipart body");
                }
            },
            "target" => target = field.text().await.unwrap_or_default(),
            "lang" => lang = field.text().await.ok().filter(|s| !s.is_empty()),
            _ => {} // unknown fields are ignored
        }
    }

    let Some(audio) = audio else {
        return error_response(StatusCode::BAD_REQUEST, "audio file is required");
    };

    let opts = RecognizeOptions {
        lang: lang.unwrap_or_else(|| state.config.asr.lang.clone()),
        target_text: (!target.is_empty()).then(|| target.clone()),
    };

    let recognition = match state.recognizer.recognize(&audio, &opts).await {
        Ok(recognition) => recognition,
        Err(e) => {
            log::error!("asr: recognition failed: {e}");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "recognition failed");
        }
    };

    let reference = if target.is_empty() {
        &recognition.text
    } else {
        &target
    };
    let score = score_utterance(reference, &recognition.text);

    Json(RecognizeResponse {
        text: recognition.text,
        confidence: recognition.confidence,
        score: score.normalized_score,
        stars: score.stars,
        wer: score.error_rate,
        target,
    })
    .into_response()
}
