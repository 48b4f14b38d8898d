//! Runtime configuration read from the environment (and an optional `.env`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use validator::Validate;

use crate::analysis::keywords::{DEFAULT_MAX_KEYWORDS, DEFAULT_MIN_WORD_LENGTH};
use crate::error::{AppError, Result};

pub const ENV_MAX_KEYWORDS: &str = "INSPIRE_MAX_KEYWORDS";
pub const ENV_MIN_WORD_LENGTH: &str = "INSPIRE_MIN_WORD_LENGTH";
pub const ENV_LOG_FORMAT: &str = "INSPIRE_LOG_FORMAT";
pub const ENV_DATA_DIR: &str = "INSPIRE_DATA_DIR";
pub const ENV_LIBRARY_CAPACITY: &str = "INSPIRE_LIBRARY_CAPACITY";

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_LIBRARY_CAPACITY: usize = 50;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines on stderr
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
    /// Bunyan-compatible JSON records
    Bunyan,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "bunyan" => Ok(LogFormat::Bunyan),
            other => Err(AppError::Config(format!(
                "Unknown log format '{}' (expected pretty, json or bunyan)",
                other
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
            LogFormat::Bunyan => "bunyan",
        };
        f.write_str(name)
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Number of keywords kept after ranking.
    #[validate(range(min = 1, max = 50))]
    pub max_keywords: usize,
    /// Minimum token length, in characters, for a keyword candidate.
    #[validate(range(min = 1, max = 20))]
    pub min_word_length: usize,
    pub log_format: LogFormat,
    /// Directory holding the saved idea library.
    pub data_dir: PathBuf,
    /// Maximum number of saved ideas; the oldest are dropped first.
    #[validate(range(min = 1, max = 1000))]
    pub library_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_keywords: DEFAULT_MAX_KEYWORDS,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            log_format: LogFormat::default(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            library_capacity: DEFAULT_LIBRARY_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Loads `.env` if present, then reads the `INSPIRE_*` variables.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a validated config from a key lookup. Missing keys keep their
    /// defaults; present but malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAX_KEYWORDS) {
            config.max_keywords = parse_count(ENV_MAX_KEYWORDS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MIN_WORD_LENGTH) {
            config.min_word_length = parse_count(ENV_MIN_WORD_LENGTH, &raw)?;
        }
        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.log_format = raw.parse()?;
        }
        if let Some(raw) = lookup(ENV_DATA_DIR) {
            if !raw.trim().is_empty() {
                config.data_dir = PathBuf::from(raw.trim());
            }
        }
        if let Some(raw) = lookup(ENV_LIBRARY_CAPACITY) {
            config.library_capacity = parse_count(ENV_LIBRARY_CAPACITY, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Path of the saved idea library file.
    pub fn library_path(&self) -> PathBuf {
        self.data_dir.join(crate::library::LIBRARY_FILE)
    }
}

fn parse_count(key: &str, raw: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|e| AppError::Config(format!("{} must be a positive integer, got '{}': {}", key, raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.max_keywords, 10);
        assert_eq!(config.min_word_length, 3);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_MAX_KEYWORDS, "5"),
            (ENV_LOG_FORMAT, "Bunyan"),
            (ENV_DATA_DIR, "/tmp/ideas"),
        ]))
        .unwrap();
        assert_eq!(config.max_keywords, 5);
        assert_eq!(config.log_format, LogFormat::Bunyan);
        assert_eq!(config.library_path(), PathBuf::from("/tmp/ideas/ideas.json"));
    }

    #[test]
    fn test_out_of_range_is_validation_error() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_MAX_KEYWORDS, "0")])).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_malformed_is_config_error() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_MIN_WORD_LENGTH, "three")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = "xml".parse::<LogFormat>().unwrap_err();
        assert!(err.to_string().contains("xml"));
    }
}
