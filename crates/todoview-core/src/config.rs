//! Configuration types for todoview.
//!
//! [`Config::load`] reads `~/.config/todoview/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] reads an
//! explicit file on top of the same defaults. [`Config::defaults`] returns the
//! defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[source]
base_url     = "https://d483ba614525.ngrok-free.app"
endpoint     = "/todos"
timeout_secs = 15

[ui]
initial_refresh_delay_ms = 150
theme                    = "default"

[keybindings]
refresh          = "r"
quit             = "q"
help             = "?"
scroll_to_top    = "g"
scroll_to_bottom = "G"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/todoview/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

/// `[source]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String { "https://d483ba614525.ngrok-free.app".to_string() }
fn default_endpoint() -> String { "/todos".to_string() }
fn default_timeout_secs() -> u64 { 15 }

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SourceConfig {
    /// Full request URL: `base_url` joined with `endpoint`.
    pub fn url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            base.to_string()
        } else if endpoint.starts_with('/') {
            format!("{base}{endpoint}")
        } else {
            format!("{base}/{endpoint}")
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Delay between the first frame and the automatic refresh.
    #[serde(default = "default_initial_refresh_delay_ms")]
    pub initial_refresh_delay_ms: u64,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_initial_refresh_delay_ms() -> u64 { 150 }
fn default_theme() -> String { "default".to_string() }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_refresh_delay_ms: default_initial_refresh_delay_ms(),
            theme: default_theme(),
        }
    }
}

impl UiConfig {
    pub fn initial_refresh_delay(&self) -> Duration {
        Duration::from_millis(self.initial_refresh_delay_ms)
    }
}

/// `[keybindings]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_refresh")]
    pub refresh: String,
    #[serde(default = "default_quit")]
    pub quit: String,
    #[serde(default = "default_help")]
    pub help: String,
    #[serde(default = "default_scroll_to_top")]
    pub scroll_to_top: String,
    #[serde(default = "default_scroll_to_bottom")]
    pub scroll_to_bottom: String,
}

fn default_refresh() -> String { "r".to_string() }
fn default_quit() -> String { "q".to_string() }
fn default_help() -> String { "?".to_string() }
fn default_scroll_to_top() -> String { "g".to_string() }
fn default_scroll_to_bottom() -> String { "G".to_string() }

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            refresh: default_refresh(),
            quit: default_quit(),
            help: default_help(),
            scroll_to_top: default_scroll_to_top(),
            scroll_to_bottom: default_scroll_to_bottom(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/todoview/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::layered(&path, false)
    }

    /// Load an explicit config file on top of the built-in defaults. The file
    /// must exist.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Self::layered(path.as_ref(), true)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn layered(path: &Path, required: bool) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(required))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("todoview")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
