//! HTTP client for the practice server API.
//!
//! [`CoachClient`] is the Rust counterpart of the frontend's network layer.
//! All connection details (`base_url`, timeout) come from the
//! [`ClientConfig`] passed to [`CoachClient::from_config`] — nothing is
//! hardcoded and nothing is read from global state.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::progress::ProgressEntry;

// ---------------------------------------------------------------------------
// ClientError
// ---------------------------------------------------------------------------

/// Errors that can occur while talking to the practice server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-success status code.
    #[error("server returned status {0}")]
    Status(u16),

    /// The response body could not be parsed as expected JSON.
    #[error("failed to parse server response: {0}")]
    Parse(String),

    /// The response parsed but did not carry the expected payload.
    #[error("server response missing expected payload: {0}")]
    MissingPayload(&'static str),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else if e.is_decode() {
            ClientError::Parse(e.to_string())
        } else {
            ClientError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Optional synthesis parameters forwarded to `/tts`.
#[derive(Debug, Clone, Default)]
pub struct TtsOptions {
    pub voice_id: Option<i64>,
    pub speed: Option<f64>,
}

/// Scored recognition result from `/asr/recognize`.
#[derive(Debug, Clone, Deserialize)]
pub struct AsrResponse {
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
    /// Target text the server scored against.
    pub target: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TtsData {
    url: String,
}

#[derive(Debug, Deserialize)]
struct TtsEnvelope {
    code: u16,
    data: Option<TtsData>,
}

#[derive(Debug, Deserialize)]
struct ProgressList {
    data: Vec<ProgressEntry>,
}

#[derive(Debug, Deserialize)]
struct ProgressReceipt {
    received: ProgressEntry,
}

// ---------------------------------------------------------------------------
// CoachClient
// ---------------------------------------------------------------------------

/// Typed wrapper over the practice server's HTTP API.
pub struct CoachClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl CoachClient {
    /// Build a client from configuration.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`.  A default (no-timeout) client is used as a
    /// last-resort fallback if the builder fails (should never happen in
    /// practice).
    pub fn from_config(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }

    /// Join `path` onto the configured base URL.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Request a playable audio URL for `text` from `/tts`.
    pub async fn synthesize(&self, text: &str, options: &TtsOptions) -> Result<String, ClientError> {
        let body = serde_json::json!({
            "text":    text,
            "voiceId": options.voice_id,
            "speed":   options.speed,
        });

        let response = self.client.post(self.url("/tts")).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let envelope: TtsEnvelope = response.json().await?;
        if envelope.code != 0 {
            return Err(ClientError::Status(envelope.code));
        }
        envelope
            .data
            .map(|d| d.url)
            .ok_or(ClientError::MissingPayload("tts url"))
    }

    /// Upload a recording to `/asr/recognize` and return the scored result.
    ///
    /// `audio` is the raw recording; `target` is the practice text the
    /// server should score against.
    pub async fn recognize(
        &self,
        audio: Vec<u8>,
        target: &str,
        lang: &str,
    ) -> Result<AsrResponse, ClientError> {
        let part = reqwest::multipart::Part::bytes(audio).file_name("recording.mp3");
        let form = reqwest::multipart::Form::new()
            .part("audio", part)
            .text("target", target.to_string())
            .text("lang", lang.to_string());

        let response = self
            .client
            .post(self.url("/asr/recognize"))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        Ok(response.json::<AsrResponse>().await?)
    }

    /// Fetch all practice results recorded on the server.
    pub async fn fetch_progress(&self) -> Result<Vec<ProgressEntry>, ClientError> {
        let response = self.client.get(self.url("/progress")).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        Ok(response.json::<ProgressList>().await?.data)
    }

    /// Record one practice result on the server; returns the echoed entry.
    pub async fn submit_progress(
        &self,
        entry: &ProgressEntry,
    ) -> Result<ProgressEntry, ClientError> {
        let response = self
            .client
            .post(self.url("/progress"))
            .json(entry)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        Ok(response.json::<ProgressReceipt>().await?.received)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
