//! Parsedtext Config
//!
//! This crate holds the built-in pattern registry, the serializable parse
//! rules, and TOML configuration loading.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/parsedtext/config.toml`
//! - macOS: `~/Library/Application Support/parsedtext/config.toml`
//! - Windows: `%APPDATA%\parsedtext\config.toml`
//!
//! A config file lists parse rules in priority order, optional named
//! patterns that extend the registry, and highlight styles:
//!
//! ```toml
//! [patterns]
//! hashtag = "#\\w+"
//!
//! [[rules]]
//! Type = "hashtag"
//! Props = { color = "magenta" }
//!
//! [style]
//! Palette = ["cyan", "green"]
//! ```
//!
//! # Example
//!
//! ```no_run
//! use parsedtext_config::Config;
//!
//! let config = Config::load().unwrap();
//! let patterns = config.descriptors().unwrap();
//! ```

mod registry;
mod rule;
mod style;

pub use registry::{BuiltinPattern, PatternRegistry, EMAIL_PATTERN, PHONE_PATTERN, URL_PATTERN};
pub use rule::{resolve_rules, RuleConfig};
pub use style::{StyleConfig, TextStyle, DEFAULT_PALETTE};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::debug;
use parsedtext_core::{ParsedTextError, Result};
use parsedtext_parser::PatternDescriptor;
use serde::{Deserialize, Serialize};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"# Rules are applied in order; an earlier rule claims text before later ones.
[[rules]]
Type  = "url"
Props = { underline = true }

[[rules]]
Type = "email"

[[rules]]
Type = "phone"

[style]
Palette = ["cyan", "green", "magenta", "yellow", "blue"]
"#;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Named patterns added to the registry
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub patterns: BTreeMap<String, String>,

    /// Parse rules, in priority order
    #[serde(default)]
    pub rules: Vec<RuleConfig>,

    /// Highlight style configuration
    #[serde(default)]
    pub style: StyleConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// An empty configuration: no rules, no custom patterns.
    pub fn empty() -> Self {
        Self {
            patterns: BTreeMap::new(),
            rules: Vec::new(),
            style: StyleConfig::default(),
        }
    }

    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use parsedtext_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[[rules]]"));
    /// assert!(toml.contains("[style]"));
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
        directories::ProjectDirs::from("", "", "parsedtext")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir().ok_or_else(|| {
            ParsedTextError::config("Could not determine config directory")
        })?;

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
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                debug!("loading config from {}", config_path.display());
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            ParsedTextError::config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Example
    ///
    /// ```
    /// use parsedtext_config::Config;
    ///
    /// let config = Config::from_toml("[[rules]]\nPattern = \"#\\\\w+\"").unwrap();
    /// assert_eq!(config.rules.len(), 1);
    /// ```
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ParsedTextError::config(format!("Parse error: {}", e)))
    }

    /// Load configuration with an optional override file or inline TOML.
    ///
    /// 1. Load the base config from the default location
    /// 2. If an override is given:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as a TOML string and merge it
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_config = if override_path.exists() {
                Self::load_from(override_path)?
            } else {
                Self::from_toml(override_str)?
            };

            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// Named patterns from `other` are added (replacing same-named ones),
    /// rules from `other` are appended after the existing rules, and the
    /// style is merged field by field.
    ///
    /// # Example
    ///
    /// ```
    /// use parsedtext_config::{Config, RuleConfig};
    ///
    /// let mut base = Config::default();
    /// let mut extra = Config::empty();
    /// extra.rules.push(RuleConfig::of_pattern("#\\w+"));
    ///
    /// base.merge(&extra);
    /// assert_eq!(base.rules.len(), 4);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.patterns
            .extend(other.patterns.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.rules.extend(other.rules.iter().cloned());
        self.style.merge(&other.style);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ParsedTextError::config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// The built-in registry extended with this config's named patterns.
    pub fn registry(&self) -> Result<PatternRegistry> {
        let mut registry = PatternRegistry::with_builtins();
        for (name, source) in &self.patterns {
            registry.register(name.clone(), source.clone(), false)?;
        }
        Ok(registry)
    }

    /// Resolve every configured rule into a pattern descriptor, in order.
    pub fn descriptors(&self) -> Result<Vec<PatternDescriptor>> {
        resolve_rules(&self.rules, &self.registry()?)
    }
}
