//! Dictionary configuration module.
//!
//! Controls which words seed the trie at startup.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Words inserted when no other seed list is configured.
pub const DEFAULT_SEED_WORDS: [&str; 8] =
    ["cat", "car", "cart", "cake", "cell", "dog", "don", "dot"];

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Words inserted before any word list is read
    pub seed_words: Vec<String>,

    /// Optional word-list file, one word per line
    pub path: Option<PathBuf>,

    /// Words longer than this many characters are skipped
    pub max_word_length: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            seed_words: DEFAULT_SEED_WORDS.iter().map(|w| w.to_string()).collect(),
            path: None,
            max_word_length: 64,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == 0 {
            return Err(ConfigError::ValidationError(
                "max_word_length must be greater than 0".to_string(),
            ));
        }

        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "dictionary path must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
