//! File configuration.
//!
//! Word lists are external data, so their locations (and optionally
//! their pinned BLAKE3 digests) come from a TOML file or CLI flags.

use crate::estimate::SNOWDEN_GUESS_RATE;
use crate::wordlist::{BuildOptions, WordListVariant};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("word count must be positive")]
    InvalidWordCount,
    #[error("word count {words} outside allowed range {min}-{max}")]
    WordCountOutOfRange { words: u32, min: u32, max: u32 },
    #[error("invalid word count range {min}-{max}")]
    InvalidRange { min: u32, max: u32 },
    #[error("guess rate must be a positive finite number")]
    InvalidGuessRate,
    #[error("no {0} word list configured")]
    MissingWordList(WordListVariant),
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Where the word lists live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WordListConfig {
    /// Path of the default list.
    pub default: Option<PathBuf>,
    /// Path of the alternate list.
    pub alternate: Option<PathBuf>,
    /// Expected BLAKE3 digest of the default list.
    pub default_digest: Option<String>,
    /// Expected BLAKE3 digest of the alternate list.
    pub alternate_digest: Option<String>,
    /// Reject tables that repeat a roll code.
    pub strict: bool,
}

impl Default for WordListConfig {
    fn default() -> Self {
        Self {
            default: Some(PathBuf::from("wordlists/diceware.tsv")),
            alternate: Some(PathBuf::from("wordlists/beale.tsv")),
            default_digest: None,
            alternate_digest: None,
            strict: false,
        }
    }
}

impl WordListConfig {
    /// Path configured for `variant`.
    pub fn path(&self, variant: WordListVariant) -> Result<&Path, ConfigError> {
        let path = match variant {
            WordListVariant::Default => self.default.as_deref(),
            WordListVariant::Alternate => self.alternate.as_deref(),
        };
        path.ok_or(ConfigError::MissingWordList(variant))
    }

    /// Pinned digest for `variant`, if any.
    pub fn digest(&self, variant: WordListVariant) -> Option<&str> {
        match variant {
            WordListVariant::Default => self.default_digest.as_deref(),
            WordListVariant::Alternate => self.alternate_digest.as_deref(),
        }
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            strict: self.strict,
        }
    }
}

/// Passphrase generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Number of words to generate.
    pub words: u32,
    /// Assumed attacker guess rate for entropy reports.
    pub guesses_per_second: f64,
    pub min_words: u32,
    pub max_words: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            words: 6,
            guesses_per_second: SNOWDEN_GUESS_RATE,
            min_words: 1,
            max_words: 20,
        }
    }
}

impl GenerationConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.words == 0 {
            return Err(ConfigError::InvalidWordCount);
        }
        if self.min_words == 0 || self.min_words > self.max_words {
            return Err(ConfigError::InvalidRange {
                min: self.min_words,
                max: self.max_words,
            });
        }
        if !(self.min_words..=self.max_words).contains(&self.words) {
            return Err(ConfigError::WordCountOutOfRange {
                words: self.words,
                min: self.min_words,
                max: self.max_words,
            });
        }
        if !(self.guesses_per_second.is_finite() && self.guesses_per_second > 0.0) {
            return Err(ConfigError::InvalidGuessRate);
        }
        Ok(())
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub wordlists: WordListConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// Not validated here: callers apply overrides first, then call
    /// [`FileConfig::validate`].
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validates the merged configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generation.validate()
    }
}
