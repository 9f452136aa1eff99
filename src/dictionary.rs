//! Dictionary loading for Kupu.
//!
//! A [`Dictionary`] gathers the words that seed a [`KupuTrie`]: the
//! configured seed list and, optionally, a word-list file with one word per
//! line. Blank lines and lines starting with `#` are ignored.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::DictionaryConfig;
use crate::data_structures::KupuTrie;
use crate::error::dictionary::DictionaryError;

/// Ordered collection of words waiting to be inserted into a trie.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    max_word_length: usize,
}

impl Dictionary {
    /// Creates an empty dictionary that skips words longer than
    /// `max_word_length` characters.
    pub fn new(max_word_length: usize) -> Self {
        Self {
            words: Vec::new(),
            max_word_length,
        }
    }

    /// Builds a dictionary from configuration.
    ///
    /// Seed words are added first, then the word-list file if one is set.
    ///
    /// # Returns
    ///
    /// * `Ok(Dictionary)` - The collected words.
    /// * `Err(DictionaryError)` - If the word-list file could not be read.
    pub fn from_config(config: &DictionaryConfig) -> Result<Self, DictionaryError> {
        let mut dictionary = Self::new(config.max_word_length);
        dictionary.add_words(&config.seed_words);

        if let Some(path) = &config.path {
            dictionary.load_word_list(path)?;
        }

        info!(words = dictionary.len(), "dictionary loaded");
        Ok(dictionary)
    }

    /// Adds a single word.
    ///
    /// Surrounding whitespace is trimmed. Blank entries, `#` comments and
    /// words over the length limit are skipped.
    ///
    /// # Returns
    ///
    /// `true` if the word was added.
    pub fn add_word(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() || word.starts_with('#') {
            return false;
        }

        let length = word.chars().count();
        if length > self.max_word_length {
            warn!(
                length,
                max = self.max_word_length,
                "skipping word longer than the configured limit"
            );
            return false;
        }

        self.words.push(word.to_string());
        true
    }

    /// Adds every word from an iterator, returning how many were kept.
    pub fn add_words<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter(|word| self.add_word(word.as_ref()))
            .count()
    }

    /// Adds the words of a word list given as text, one word per line.
    pub fn add_word_list(&mut self, text: &str) -> usize {
        self.add_words(text.lines())
    }

    /// Reads a word-list file and adds its words.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of words added.
    /// * `Err(DictionaryError)` - If the file could not be read.
    pub fn load_word_list<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, DictionaryError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let added = self.add_word_list(&text);
        debug!(path = %path.display(), added, "word list read");
        Ok(added)
    }

    /// Returns the collected words in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of collected words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Checks if no words were collected.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Inserts every collected word into a new trie.
    pub fn build_trie(&self) -> KupuTrie {
        let trie: KupuTrie = self.words.iter().collect();
        debug!(words = trie.len(), nodes = trie.node_count(), "trie built");
        trie
    }
}
