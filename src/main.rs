//! Application entry point — Kana Coach practice server.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Wire the placeholder ASR/TTS backends and the in-memory progress log.
//! 4. Bind the configured address and serve the router until shutdown.

use anyhow::Result;

use kana_coach::config::AppConfig;
use kana_coach::server::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Kana Coach server starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });
    let addr = config.server.bind_addr();

    // 3. Placeholder backends — swap for real cloud clients when credentials
    //    and signing land.
    let state = AppState::with_placeholders(config);
    let app = build_router(state);

    // 4. Serve
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("Kana Coach server listening on http://{addr}");
    log::info!("Health check: http://{addr}/health");

    axum::serve(listener, app).await?;

    Ok(())
}
