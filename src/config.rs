//! Configuration file handling for asciify.
//!
//! Loads configuration from `~/.config/asciify/config.toml` or a custom path.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::settings::{Settings, SettingsError, SettingsUpdate};
use crate::source::{FetchOptions, DEFAULT_CONNECT_TIMEOUT, DEFAULT_MAX_BYTES, DEFAULT_TIMEOUT};

/// Default config file written by `asciify config init`.
pub const DEFAULT_CONFIG: &str = r#"# asciify configuration

[settings]
# Glyph ramp: SMALL (10 levels) or BIG (70 levels)
charset = "SMALL"
# Output width in characters, 1-500 (0 = derive from height)
width = 150
# Output height in characters, 1-500 (0 = derive from width)
height = 0

[fetch]
# Whole-request timeout for image downloads
timeout_secs = 30
# Connection timeout
connect_timeout_secs = 10
# Largest image download accepted, in bytes
max_bytes = 16777216
"#;

/// Configuration file structure for asciify.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub settings: SettingsConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Startup values for the rendering settings.
#[derive(Debug, Deserialize, Default)]
pub struct SettingsConfig {
    #[serde(default)]
    pub charset: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Limits for image downloads.
#[derive(Debug, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            max_bytes: default_max_bytes(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT.as_secs()
}

fn default_max_bytes() -> u64 {
    DEFAULT_MAX_BYTES
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Initial settings, validated with the same rules as a settings update.
    pub fn initial_settings(&self) -> Result<Settings, ConfigError> {
        let update = SettingsUpdate {
            char_set: self.settings.charset.clone(),
            width: self.settings.width.map(|w| w.to_string()),
            height: self.settings.height.map(|h| h.to_string()),
        };
        Settings::default()
            .apply(&update)
            .map_err(ConfigError::InvalidSettings)
    }

    /// Fetch limits for the image client.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: Duration::from_secs(self.fetch.timeout_secs),
            connect_timeout: Duration::from_secs(self.fetch.connect_timeout_secs),
            max_bytes: self.fetch.max_bytes,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid [settings] in config file: {0}")]
    InvalidSettings(SettingsError),
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("asciify").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/asciify/config.toml")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{CharSet, Dimension};

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.initial_settings().unwrap(), Settings::default());
        assert_eq!(config.fetch_options(), FetchOptions::default());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.initial_settings().unwrap(), Settings::default());
        assert_eq!(config.fetch.max_bytes, DEFAULT_MAX_BYTES);
    }

    #[test]
    fn test_settings_section() {
        let config: Config = toml::from_str(
            r#"
[settings]
charset = "BIG"
width = 110
"#,
        )
        .unwrap();
        let settings = config.initial_settings().unwrap();
        assert_eq!(settings.charset, CharSet::Big);
        assert_eq!(settings.width, Dimension::Fixed(110));
        assert_eq!(settings.height, Dimension::Auto);
    }

    #[test]
    fn test_invalid_settings_section() {
        let config: Config = toml::from_str("[settings]\nwidth = 900\n").unwrap();
        assert!(matches!(
            config.initial_settings(),
            Err(ConfigError::InvalidSettings(SettingsError::OutOfRange { field: "width" }))
        ));
    }
}
