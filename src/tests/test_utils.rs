//! Test utilities and fixtures for Kupu.
//!
//! This module provides proptest strategies for words over the trie
//! alphabet and a fixture for tests that touch files or the environment.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

use crate::config::dictionary::DEFAULT_SEED_WORDS;
use crate::data_structures::KupuTrie;

/// Build a trie holding the default seed words.
pub fn demo_trie() -> KupuTrie {
    DEFAULT_SEED_WORDS.into_iter().collect()
}

/// Generate words over the 52-letter alphabet.
///
/// # Parameters
///
/// * `max_length` - The maximum length of the generated words.
pub fn word_strategy(max_length: usize) -> BoxedStrategy<String> {
    proptest::string::string_regex(&format!("[a-zA-Z]{{0,{max_length}}}"))
        .expect("valid word regex")
        .boxed()
}

/// Generate lowercase words, matching the letters tried by spelling edits.
pub fn lowercase_word_strategy(max_length: usize) -> BoxedStrategy<String> {
    proptest::collection::vec(proptest::char::range('a', 'z'), 0..=max_length)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Test fixture for tests requiring files or environment variables.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write a file with the given name into the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
