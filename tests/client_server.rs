//! End-to-end test: `CoachClient` against a live server on a loopback port.
//!
//! This is the full practice loop the frontend performs — fetch a TTS URL,
//! upload a recording, record the result — with the placeholder backends
//! standing in for the cloud services.

use kana_coach::client::{ClientError, CoachClient, TtsOptions};
use kana_coach::config::{AppConfig, ClientConfig};
use kana_coach::progress::ProgressEntry;
use kana_coach::server::{build_router, AppState};

/// Bind an ephemeral port, serve the app on it, return a client pointed at it.
async fn spawn_server() -> CoachClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");

    let app = build_router(AppState::with_placeholders(AppConfig::default()));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    CoachClient::from_config(&ClientConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 5,
    })
}

#[tokio::test]
async fn full_shadowing_round_trip() {
    let client = spawn_server().await;

    // 1. Ask for the practice audio.
    let url = client
        .synthesize("これは ペン です", &TtsOptions::default())
        .await
        .expect("tts");
    assert_eq!(url, "https://example.com/mock-tts.mp3");

    // 2. "Record" and upload; the placeholder perturbs the target's last char.
    let result = client
        .recognize(b"fake-recording".to_vec(), "これは ペン です", "ja-JP")
        .await
        .expect("asr");
    assert_eq!(result.text, "これは ペン です~");
    assert!(result.wer > 0.0 && result.wer < 1.0);
    assert_eq!(result.score, 1.0 - result.wer);

    // 3. Record the outcome and read it back.
    let entry = ProgressEntry {
        kind: "shadowing".into(),
        label: result.target.clone(),
        stars: result.stars,
        accuracy: result.score,
    };
    let echoed = client.submit_progress(&entry).await.expect("submit");
    assert_eq!(echoed, entry);

    let all = client.fetch_progress().await.expect("fetch");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], entry);
}

#[tokio::test]
async fn blank_tts_text_surfaces_as_status_error() {
    let client = spawn_server().await;

    let err = client
        .synthesize("   ", &TtsOptions::default())
        .await
        .expect_err("blank text must be rejected");
    assert!(matches!(err, ClientError::Status(400)), "got {err:?}");
}
