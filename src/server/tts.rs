//! `POST /tts` — return a playable audio URL for a piece of practice text.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::server::AppState;
use crate::tts::{mock_audio_url, SynthesisOptions};

/// Duration reported for the fixed sample clip, in milliseconds.
const MOCK_DURATION_MS: u64 = 2_000;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Request body for `/tts`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TtsRequest {
    /// Text to synthesise.  Required, must not be blank.
    pub text: Option<String>,
    /// Voice catalogue id; falls back to the configured default.
    pub voice_id: Option<i64>,
    /// Speaking-speed factor; falls back to the configured default.
    pub speed: Option<f64>,
}

/// Envelope shared by success and error responses.
#[derive(Debug, Serialize)]
pub struct TtsResponse {
    pub code: u16,
    pub message: &'static str,
    pub data: Option<TtsData>,
}

/// Payload of a successful `/tts` call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TtsData {
    /// Playable audio URL.
    pub url: String,
    /// Clip duration in milliseconds.
    pub duration_ms: u64,
    /// Voice id the request resolved to, echoed back.
    pub voice_id: Option<i64>,
    /// Speed the request resolved to, echoed back.
    pub speed: Option<f64>,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// Handle a synthesis request.
///
/// A blank `text` is a 400.  A synthesizer failure is *not* an error to the
/// client: the mock environment falls back to the fixed storage URL so the
/// player flow keeps working (a real backend would surface this instead).
///
/// Responses carry `Cache-Control: no-store` — the URL may be short-lived
/// once a real backend signs it.
pub async fn synthesize(
    State(state): State<AppState>,
    Json(request): Json<TtsRequest>,
) -> Response {
    let text = request.text.as_deref().unwrap_or("").trim().to_string();
    if text.is_empty() {
        let body = TtsResponse {
            code: 400,
            message: "text is required",
            data: None,
        };
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }

    let voice_id = request.voice_id.or(state.config.tts.voice_id);
    let speed = request.speed.or(state.config.tts.speed);

    let opts = SynthesisOptions {
        voice_id,
        speed,
        lang: Some(state.config.tts.lang.clone()),
    };

    let url = match state.synthesizer.synthesize(&text, &opts).await {
        Ok(url) => url,
        Err(e) => {
            log::warn!("tts: synthesis failed, serving fallback url: {e}");
            mock_audio_url().to_string()
        }
    };

    let body = TtsResponse {
        code: 0,
        message: "ok",
        data: Some(TtsData {
            url,
            duration_ms: MOCK_DURATION_MS,
            voice_id,
            speed,
        }),
    };

    (
        StatusCode::OK,
        [(header::CACHE_CONTROL, "no-store")],
        Json(body),
    )
        .into_response()
}
