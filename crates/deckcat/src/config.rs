//! Configuration management for deckcat.
//!
//! This module provides configuration loading and validation using figment,
//! supporting an optional TOML config file, environment variables, and defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name, looked up in the current directory.
const CONFIG_FILE_NAME: &str = "deckcat.toml";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "DECKCAT_";

/// Placeholder a custom remark template must contain.
pub const SOURCE_PLACEHOLDER: &str = "{{source}}";

/// Placeholder for the page title in a remark template.
pub const TITLE_PLACEHOLDER: &str = "{{title}}";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `DECKCAT_`, nested with `__`)
/// 2. TOML config file, `./deckcat.toml` unless given explicitly
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Deck assembly configuration.
    pub deck: DeckConfig,
    /// Remark page configuration.
    pub remark: RemarkConfig,
}

/// Which files make up the deck and how they are joined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Directory the sections are resolved against.
    pub base_dir: PathBuf,
    /// Section files, in output order, relative to `base_dir`.
    pub sections: Vec<String>,
    /// Text emitted between consecutive sections.
    pub separator: String,
}

/// Settings for the remark.js HTML page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemarkConfig {
    /// Page title.
    pub title: String,
    /// Optional custom template file. Must contain `{{source}}`.
    pub template: Option<PathBuf>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(".."),
            sections: default_sections(),
            separator: String::new(),
        }
    }
}

impl Default for RemarkConfig {
    fn default() -> Self {
        Self {
            title: "Slides".to_string(),
            template: None,
        }
    }
}

/// The workshop sections, in presentation order.
fn default_sections() -> Vec<String> {
    vec![
        "intro/README.md".to_string(),
        "node/README.md".to_string(),
        "useful-resources/README.md".to_string(),
    ]
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing config file is not an error; defaults apply. The result is
    /// not validated, since command-line flags may still replace values.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        Ok(figment.extract()?)
    }

    /// Load and validate the config file at `path`, which must exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidation` if the file is missing or invalid, or
    /// `ConfigLoad` if it cannot be parsed.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::validation(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }
        let config = Self::load_from(Some(path.to_path_buf()))?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.deck.sections.is_empty() {
            return Err(Error::validation("sections must not be empty"));
        }

        for section in &self.deck.sections {
            if section.trim().is_empty() {
                return Err(Error::validation("section paths must not be blank"));
            }
            if Path::new(section).is_absolute() {
                return Err(Error::validation(format!(
                    "section path must be relative to base_dir: {section}"
                )));
            }
        }

        Ok(())
    }
}
