use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::file_utils::FileManager;
use crate::language_utils;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Language the learner studies (ISO 639 code)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Language of the reference translation (ISO 639 code)
    #[serde(default = "default_reference_language")]
    pub reference_language: String,

    /// Learning behaviour
    #[serde(default)]
    pub learning: LearningConfig,

    /// Newline-delimited list of known base-form words
    #[serde(default)]
    pub known_words_path: Option<PathBuf>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for vocabulary capture and context expansion
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LearningConfig {
    /// Use the expanded sentence, rather than the single line, as a word's context
    #[serde(default = "default_true")]
    pub auto_expand_context: bool,

    /// Lines scanned on each side of the selected line
    #[serde(default = "default_max_context_depth")]
    pub max_context_depth: usize,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            auto_expand_context: default_true(),
            max_context_depth: default_max_context_depth(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Upper bound on the context scan depth
pub const MAX_CONTEXT_DEPTH: usize = 50;

fn default_target_language() -> String {
    "en".to_string()
}

fn default_reference_language() -> String {
    "zh".to_string()
}

fn default_max_context_depth() -> usize {
    crate::context::DEFAULT_MAX_DEPTH
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        for code in [&self.target_language, &self.reference_language] {
            if language_utils::validate_language_code(code).is_err() {
                return Err(ConfigError::InvalidLanguage(code.clone()));
            }
        }

        if language_utils::language_codes_match(&self.target_language, &self.reference_language) {
            return Err(ConfigError::SameLanguage(self.target_language.clone()));
        }

        let depth = self.learning.max_context_depth;
        if depth == 0 || depth > MAX_CONTEXT_DEPTH {
            return Err(ConfigError::InvalidDepth(depth));
        }

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load configuration, writing a default one first if the file does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Save configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        FileManager::write_to_file(path, &config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }

    /// English name of the target language, falling back to the raw code
    pub fn target_language_name(&self) -> String {
        language_utils::get_language_name(&self.target_language)
            .unwrap_or_else(|_| self.target_language.clone())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            target_language: default_target_language(),
            reference_language: default_reference_language(),
            learning: LearningConfig::default(),
            known_words_path: None,
            log_level: LogLevel::default(),
        }
    }
}
