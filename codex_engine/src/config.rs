//! Engine configuration, read from a TOML file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::query::{QueryClassifier, QueryRouter, DEFAULT_LEAD_WORDS, DEFAULT_MIN_QUERY_LEN};

/// Environment variable that overrides [`CodexConfig::data_dir`].
pub const DATA_DIR_ENV: &str = "CODEX_DATA_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid question pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Settings for the encyclopedia engine.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodexConfig {
    /// Root directory of the filesystem content store.
    pub data_dir: PathBuf,

    /// Minimum trimmed length of a query.
    pub min_query_len: usize,

    /// Words that mark an input as a question when it starts with one.
    pub lead_words: Vec<String>,

    /// Extra regular expressions that also mark an input as a question.
    pub question_patterns: Vec<String>,

    /// Default log filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for CodexConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            lead_words: DEFAULT_LEAD_WORDS.iter().map(|w| w.to_string()).collect(),
            question_patterns: Vec::new(),
            log_level: "info".to_string(),
        }
    }
}

impl CodexConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(source) => Self::from_toml_str(&source),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file; using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Apply [`DATA_DIR_ENV`] if it is set.
    pub fn with_env_overrides(self) -> Self {
        self.with_data_dir_override(std::env::var(DATA_DIR_ENV).ok())
    }

    /// Replace `data_dir` when an override is given and non-empty.
    pub fn with_data_dir_override(mut self, data_dir: Option<String>) -> Self {
        if let Some(dir) = data_dir.filter(|d| !d.trim().is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        self
    }

    /// Build the query router these settings describe.
    pub fn router(&self) -> Result<QueryRouter, ConfigError> {
        let classifier = self
            .question_patterns
            .iter()
            .try_fold(QueryClassifier::with_lead_words(&self.lead_words), |c, p| c.with_pattern(p))?;
        tracing::debug!(patterns = classifier.pattern_count(), "query router ready");
        Ok(QueryRouter::new(classifier, self.min_query_len))
    }
}
