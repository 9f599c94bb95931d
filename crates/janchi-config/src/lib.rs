//! Configuration for the janchi experience.
//!
//! An optional `config.toml` in the platform config directory can
//! personalize the experience. Every field has a default and any load
//! or parse failure falls back to those defaults; the experience must
//! never show a broken state to the person it is addressed to.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

/// Runtime configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name the experience is addressed to.
    pub recipient: String,
    /// Event poll timeout in milliseconds (frame pacing).
    pub tick_rate_ms: u64,
    /// Fixed random seed for reproducible decoration.
    pub seed: Option<u64>,
    /// Whether the music toggle starts in the playing state.
    pub music_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recipient: "you".to_string(),
            tick_rate_ms: 33,
            seed: None,
            music_on_start: false,
        }
    }
}

impl Config {
    /// Load the config from the platform config directory, falling
    /// back to defaults if the file is missing or malformed.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|text| toml::from_str(&text).ok())
            .unwrap_or_default()
    }

    /// Parse a config document (testable without touching the disk).
    pub fn from_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Platform config file path, if a home directory exists.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "janchi").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.recipient, "you");
        assert_eq!(config.tick_rate_ms, 33);
        assert!(config.seed.is_none());
        assert!(!config.music_on_start);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = Config::from_str("recipient = \"mina\"").unwrap();
        assert_eq!(config.recipient, "mina");
        assert_eq!(config.tick_rate_ms, 33);
    }

    #[test]
    fn test_full_document() {
        let config = Config::from_str(
            "recipient = \"mina\"\ntick_rate_ms = 16\nseed = 7\nmusic_on_start = true\n",
        )
        .unwrap();
        assert_eq!(config.tick_rate_ms, 16);
        assert_eq!(config.seed, Some(7));
        assert!(config.music_on_start);
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(Config::from_str("recipient = [").is_err());
    }
}
