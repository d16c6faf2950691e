//! `GET /progress` and `POST /progress` — practice-result recording.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::progress::ProgressEntry;
use crate::server::AppState;

/// Response body for `GET /progress`.
#[derive(Debug, Serialize)]
pub struct ProgressList {
    pub ok: bool,
    pub data: Vec<ProgressEntry>,
}

/// Response body for `POST /progress` — echoes the recorded entry.
#[derive(Debug, Serialize)]
pub struct ProgressReceipt {
    pub ok: bool,
    pub received: ProgressEntry,
}

/// List all practice results recorded during this process lifetime.
pub async fn list(State(state): State<AppState>) -> Json<ProgressList> {
    Json(ProgressList {
        ok: true,
        data: state.progress.snapshot(),
    })
}

/// Record one practice result and echo it back.
pub async fn record(
    State(state): State<AppState>,
    Json(entry): Json<ProgressEntry>,
) -> Json<ProgressReceipt> {
    log::debug!("progress: recording {} ({} stars)", entry.label, entry.stars);
    state.progress.append(entry.clone());
    Json(ProgressReceipt {
        ok: true,
        received: entry,
    })
}
