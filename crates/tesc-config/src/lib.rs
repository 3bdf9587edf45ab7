//! Tesc Config
//!
//! This crate handles configuration loading and management
//! for tesc, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/tesc/config.toml`
//! - macOS: `~/Library/Application Support/tesc/config.toml`
//! - Windows: `%APPDATA%\tesc\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use tesc_config::Config;
//!
//! // Load config with defaults
//! let mut config = Config::load().unwrap();
//!
//! // Then merge an override file
//! config.apply_override("./custom.toml").unwrap();
//! ```

mod bright;
mod preset;

pub use bright::BrightConfig;
pub use preset::Preset;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tesc_core::{BrightPolicy, Result, TescError};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[bright]
Policy = "strict"

[presets.error]
Face  = "red"
Style = "BOLD"

[presets.warning]
Face  = "yellow"
Style = "BOLD"

[presets.info]
Face  = "cyan"

[presets.success]
Face  = "green"

[presets.highlight]
Face  = "black"
Back  = "bright-yellow"

[presets.link]
Face  = "blue"
Style = "UNDERLINE"
"#;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Brightness configuration
    #[serde(default)]
    pub bright: BrightConfig,

    /// Named style presets
    #[serde(default)]
    pub presets: BTreeMap<String, Preset>,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use tesc_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[bright]"));
    /// assert!(toml.contains("[presets.error]"));
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
        directories::ProjectDirs::from("", "", "tesc").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| TescError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TescError::Config(format!("Parse error: {}", e)))
    }

    /// Merge an override given as a file path or inline TOML.
    ///
    /// - If `override_str` is a path to an existing file, load and merge it
    /// - Otherwise, treat it as a TOML string and parse it
    ///
    /// On error `self` is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use tesc_config::Config;
    /// use tesc_core::BrightPolicy;
    ///
    /// let mut config = Config::default();
    /// config.apply_override("[bright]\nPolicy = \"saturate\"").unwrap();
    /// assert_eq!(config.policy(), BrightPolicy::Saturate);
    /// ```
    pub fn apply_override(&mut self, override_str: &str) -> Result<()> {
        let override_config = Self::resolve_override(override_str)?;
        self.merge(&override_config);
        Ok(())
    }

    /// Read an override given either as a file path or as inline TOML.
    pub fn resolve_override(override_str: &str) -> Result<Self> {
        let override_path = Path::new(override_str);
        if override_path.exists() {
            Self::load_from(override_path)
        } else {
            Self::parse(override_str)
        }
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence. Presets are merged by name.
    ///
    /// # Example
    ///
    /// ```
    /// use tesc_config::Config;
    /// use tesc_core::{BrightPolicy, Face};
    ///
    /// let mut base = Config::default();
    /// let override_config = Config::parse(r#"
    ///     [bright]
    ///     Policy = "saturate"
    ///     [presets.error]
    ///     Face = "magenta"
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert_eq!(base.policy(), BrightPolicy::Saturate);
    /// assert_eq!(base.preset("error").unwrap().face, Face::Magenta);
    /// assert!(base.preset("link").is_ok());
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.bright.merge(&other.bright);
        for (name, preset) in &other.presets {
            self.presets.insert(name.clone(), *preset);
        }
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| TescError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// The effective brightness policy.
    pub fn policy(&self) -> BrightPolicy {
        self.bright.policy()
    }

    /// Look up a preset by name.
    pub fn preset(&self, name: &str) -> Result<&Preset> {
        self.presets
            .get(name)
            .ok_or_else(|| TescError::Config(format!("Unknown preset: {}", name)))
    }

    /// Preset names in sorted order.
    pub fn preset_names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }
}
