use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::platform;

/// Environment variable that overrides `server.base_url`.
pub const SERVER_ENV: &str = "FACTLENS_SERVER";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub live: LiveConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the analysis service lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Live-probe tuning for the two debounce channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Trimmed text shorter than this never probes.
    #[serde(default = "default_text_min_chars")]
    pub text_min_chars: usize,
    /// Trimmed URLs shorter than this never probe.
    #[serde(default = "default_url_min_chars")]
    pub url_min_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
    #[serde(default = "default_scroll_delay_ms")]
    pub scroll_delay_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            text_min_chars: default_text_min_chars(),
            url_min_chars: default_url_min_chars(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_ms: default_toast_ms(),
            scroll_delay_ms: default_scroll_delay_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_text_min_chars() -> usize {
    20
}

fn default_url_min_chars() -> usize {
    5
}

fn default_toast_ms() -> u64 {
    3000
}

fn default_scroll_delay_ms() -> u64 {
    100
}

impl LiveConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl UiConfig {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }

    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }

    /// Apply `FACTLENS_SERVER` and an explicit `--server` value, in that order.
    pub fn apply_overrides(&mut self, env_server: Option<String>, cli_server: Option<String>) {
        if let Some(url) = env_server.filter(|s| !s.trim().is_empty()) {
            self.server.base_url = url.trim().to_string();
        }
        if let Some(url) = cli_server.filter(|s| !s.trim().is_empty()) {
            self.server.base_url = url.trim().to_string();
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            live: LiveConfig::default(),
            ui: UiConfig::default(),
        }
    }
}
