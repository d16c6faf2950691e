//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across threads.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind, e.g. `"127.0.0.1"`.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// `host:port` string ready for a TCP bind call.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ---------------------------------------------------------------------------
// AsrConfig
// ---------------------------------------------------------------------------

/// Settings for the speech-recognition backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsrConfig {
    /// Default recognition language when a request names none (BCP-47).
    pub lang: String,
}

impl Default for AsrConfig {
    fn default() -> Self {
        Self { lang: "ja-JP".into() }
    }
}

// ---------------------------------------------------------------------------
// TtsConfig
// ---------------------------------------------------------------------------

/// Settings for the speech-synthesis backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtsConfig {
    /// Synthesis language (BCP-47).
    pub lang: String,
    /// Default voice catalogue id, backend-defined.
    pub voice_id: Option<i64>,
    /// Default speaking-speed factor, backend-defined (roughly `-2.0..=2.0`).
    pub speed: Option<f64>,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            lang: "ja-JP".into(),
            voice_id: None,
            speed: None,
        }
    }
}

// ---------------------------------------------------------------------------
// ClientConfig
// ---------------------------------------------------------------------------

/// Settings for the practice-app client.
///
/// The base address is explicit configuration handed to
/// [`CoachClient`](crate::client::CoachClient) — the scoring core never
/// reaches into any ambient application state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the practice server, e.g. `"http://localhost:3000"`.
    pub base_url: String,
    /// Maximum seconds to wait for a server response before timing out.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".into(),
            timeout_secs: 10,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use kana_coach::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Speech-recognition settings.
    pub asr: AsrConfig,
    /// Speech-synthesis settings.
    pub tts: TtsConfig,
    /// Practice-app client settings.
    pub client: ClientConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// (first-run scenario) so callers never need to special-case a missing
    /// file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Verify that a default `AppConfig` can be serialised to TOML and
    /// deserialised back without any data loss.
    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = AppConfig::default();
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(original, loaded);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn non_default_values_survive_round_trip() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let mut config = AppConfig::default();
        config.server.port = 8080;
        config.asr.lang = "en-US".into();
        config.tts.voice_id = Some(101);
        config.tts.speed = Some(-1.0);
        config.client.base_url = "http://192.168.1.10:8080".into();

        config.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(config, loaded);
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let server = ServerConfig {
            host: "0.0.0.0".into(),
            port: 8080,
        };
        assert_eq!(server.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn defaults_match_the_local_dev_setup() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.client.base_url, "http://localhost:3000");
        assert_eq!(config.asr.lang, "ja-JP");
    }
}
