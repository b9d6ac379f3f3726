//! Chatmark Config
//!
//! This crate handles configuration loading and management
//! for chatmark, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/chatmark/config.toml`
//! - macOS: `~/Library/Application Support/chatmark/config.toml`
//! - Windows: `%APPDATA%\chatmark\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use chatmark_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod output;
mod parser;

pub use output::OutputConfig;
pub use parser::ParserConfig;

use chatmark_core::{ChatmarkError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[parser]
CoalescePlain = true

[output]
Format          = "tree"
StreamSeparator = true
"#;

/// Main configuration structure.
///
/// Contains all configuration sections for chatmark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Parser configuration
    #[serde(default)]
    pub parser: ParserConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use chatmark_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[parser]"));
    /// assert!(toml.contains("[output]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "chatmark")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| ChatmarkError::Config("Could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
            .map_err(|e| ChatmarkError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` is provided:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as a TOML string and parse it
    ///
    /// # Example
    ///
    /// ```no_run
    /// use chatmark_config::Config;
    ///
    /// // Load with inline TOML override
    /// let config = Config::load_with_override(Some("[parser]\nCoalescePlain = false")).unwrap();
    /// assert!(!config.parser.coalesce_plain);
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(override_str) = override_config {
            config.apply_override(override_str)?;
        }
        Ok(config)
    }

    /// Merge an override given either as a file path or as inline TOML.
    pub fn apply_override(&mut self, override_str: &str) -> Result<()> {
        let override_path = Path::new(override_str);

        let override_toml = if override_path.is_file() {
            std::fs::read_to_string(override_path)?
        } else {
            override_str.to_string()
        };

        let override_config = Self::parse_toml(&override_toml)
            .map_err(|e| ChatmarkError::Config(format!("Override parse error: {}", e)))?;

        self.merge(&override_config);
        Ok(())
    }

    fn parse_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use chatmark_config::Config;
    /// use chatmark_core::OutputFormat;
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r#"
    ///     [output]
    ///     Format = "plain"
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert_eq!(base.output.format, OutputFormat::Plain);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.parser.merge(&other.parser);
        self.output.merge(&other.output);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ChatmarkError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}
