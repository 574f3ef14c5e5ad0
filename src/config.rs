//! # Configuration
//!
//! Optional settings read from `~/.config/chainforge-studio/config.json`.
//!
//! ## Overview
//!
//! Every field is optional; a missing file means all defaults. The file is
//! only ever read: the studio keeps no state between runs. Command-line flags
//! override individual fields after loading (see `main.rs`).
//!
//! ```json
//! {
//!   "theme": "Forge",
//!   "model": "gemini-2.5-flash",
//!   "temperature": 0.7,
//!   "base_url": "https://generativelanguage.googleapis.com",
//!   "reveal_pre_delay_ms": 600,
//!   "reveal_line_delay_ms": 100
//! }
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.

use crate::genai::{GenerationSettings, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::playground::sequencer::{DEFAULT_LINE_DELAY, DEFAULT_PRE_DELAY};
use crate::playground::Pacing;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory and file name prefix used for config and data files.
pub const APP_NAME: &str = "chainforge-studio";

/// Startup configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of a built-in theme.
    #[serde(default = "default_theme_name")]
    pub theme: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Gemini API host, without the `/v1beta/...` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Pause between the echoed prompt and the request.
    #[serde(default = "default_pre_delay_ms")]
    pub reveal_pre_delay_ms: u64,

    /// Pause after each revealed transcript line.
    #[serde(default = "default_line_delay_ms")]
    pub reveal_line_delay_ms: u64,
}

fn default_theme_name() -> String {
    "Forge".to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_pre_delay_ms() -> u64 {
    DEFAULT_PRE_DELAY.as_millis() as u64
}

fn default_line_delay_ms() -> u64 {
    DEFAULT_LINE_DELAY.as_millis() as u64
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            model: default_model(),
            temperature: default_temperature(),
            base_url: default_base_url(),
            reveal_pre_delay_ms: default_pre_delay_ms(),
            reveal_line_delay_ms: default_line_delay_ms(),
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// An explicitly given path must exist; the default location may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                Self::load_from(path)
            }
            None => match Self::default_path() {
                Some(path) => Self::load_from(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Return the path to the default config file, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            model: self.model.clone(),
            temperature: self.temperature,
            base_url: self.base_url.clone(),
        }
    }

    pub fn pacing(&self) -> Pacing {
        Pacing {
            pre_delay: Duration::from_millis(self.reveal_pre_delay_ms),
            line_delay: Duration::from_millis(self.reveal_line_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "Forge");
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.reveal_pre_delay_ms, 600);
        assert_eq!(config.reveal_line_delay_ms, 100);
    }

    #[test]
    fn test_deserialize_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_deserialize_partial() {
        let json = r#"{"theme": "Nord", "reveal_line_delay_ms": 0}"#;
        let config: Config = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.theme, "Nord");
        assert_eq!(config.reveal_line_delay_ms, 0);
        assert_eq!(config.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("does_not_exist.json");

        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_explicit_missing_path_fails() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("nope.json");

        let err = Config::load(Some(&config_path)).expect_err("must fail");
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("config.json");
        fs::write(
            &config_path,
            r#"{"model": "gemini-2.0-flash", "base_url": "http://127.0.0.1:8080"}"#,
        )
        .expect("write");

        let loaded = Config::load(Some(&config_path)).expect("load");
        let settings = loaded.generation_settings();
        assert_eq!(settings.model, "gemini-2.0-flash");
        assert_eq!(settings.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_json_reports_path() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "not json").expect("write");

        let err = Config::load_from(&config_path).expect_err("must fail");
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_deny_unknown_fields() {
        let json = r#"{"theme": "Nord", "unknown_field": true}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err(), "should reject unknown fields");
    }

    #[test]
    fn test_pacing_from_millis() {
        let config = Config {
            reveal_pre_delay_ms: 10,
            reveal_line_delay_ms: 0,
            ..Config::default()
        };
        let pacing = config.pacing();
        assert_eq!(pacing.pre_delay, Duration::from_millis(10));
        assert_eq!(pacing.line_delay, Duration::ZERO);
    }
}
