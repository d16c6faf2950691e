//! HTTP server module.
//!
//! Thin glue between the wire and the library: every handler parses a
//! request, calls a placeholder backend and/or the pure
//! [`score`](crate::score) functions, and serialises the result.  No scoring
//! semantics live here.
//!
//! # Routes
//!
//! | Method | Path             | Purpose                                   |
//! |--------|------------------|-------------------------------------------|
//! | POST   | `/asr/recognize` | upload audio, recognise + score utterance |
//! | POST   | `/tts`           | request a (mock) audio URL for a text     |
//! | GET    | `/progress`      | list recorded practice results            |
//! | POST   | `/progress`      | record one practice result                |
//! | GET    | `/health`        | liveness probe                            |

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::asr::Recognizer;
use crate::config::AppConfig;
use crate::progress::ProgressLog;
use crate::tts::Synthesizer;

pub mod asr;
pub mod health;
pub mod progress;
pub mod tts;

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Speech-recognition backend.
    pub recognizer: Arc<dyn Recognizer>,
    /// Speech-synthesis backend.
    pub synthesizer: Arc<dyn Synthesizer>,
    /// In-memory practice-progress log.
    pub progress: Arc<ProgressLog>,
    /// Loaded application configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Create new application state from explicit backends.
    pub fn new(
        recognizer: Arc<dyn Recognizer>,
        synthesizer: Arc<dyn Synthesizer>,
        progress: Arc<ProgressLog>,
        config: AppConfig,
    ) -> Self {
        Self {
            recognizer,
            synthesizer,
            progress,
            config,
        }
    }

    /// State wired to the placeholder backends — what `main` runs today and
    /// what the integration tests drive.
    pub fn with_placeholders(config: AppConfig) -> Self {
        Self::new(
            Arc::new(crate::asr::PlaceholderRecognizer::new()),
            Arc::new(crate::tts::PlaceholderSynthesizer::new()),
            Arc::new(ProgressLog::new()),
            config,
        )
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the application router.
///
/// CORS is wide open — the practice frontend runs from a different origin
/// during local development, matching the original deployment setup.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/asr/recognize", post(asr::recognize))
        .route("/tts", post(tts::synthesize))
        .route("/progress", get(progress::list).post(progress::record))
        .route("/health", get(health::health_check))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
