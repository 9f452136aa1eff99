//! Integration tests for the Kupu Trie and dictionary loading.

use std::io::Write;

use kupu_lib::config::{ConfigLoader, DictionaryConfig};
use kupu_lib::data_structures::{KupuTrie, SpellCheck};
use kupu_lib::dictionary::Dictionary;
use kupu_lib::error::dictionary::DictionaryError;

const WORDS: [&str; 8] = ["cat", "car", "cart", "cake", "cell", "dog", "don", "dot"];

fn demo_trie() -> KupuTrie {
    let mut trie = KupuTrie::new();
    for word in WORDS {
        trie.insert(word);
    }
    trie
}

#[test]
fn test_autocomplete_scenario() {
    let trie = demo_trie();
    assert_eq!(trie.words_with_prefix("ca"), vec!["cake", "car", "cart", "cat"]);
    assert!(trie.words_with_prefix("xyz").is_empty());
}

#[test]
fn test_spell_check_scenario() {
    let trie = demo_trie();

    let result = trie.suggest_corrections("kat");
    assert!(result.suggestions().contains(&"cat".to_string()));
    assert_eq!(trie.suggest_corrections("dog"), SpellCheck::Correct);
}

#[test]
fn test_prediction_matches_autocomplete() {
    let trie = demo_trie();
    let predicted: Vec<String> = trie.prefix_iter("do").collect();
    assert_eq!(predicted, trie.words_with_prefix("do"));
}

#[test]
fn test_mixed_case_dictionary() {
    let mut trie = KupuTrie::new();
    trie.insert("Cat");
    trie.insert("cat");

    assert!(trie.contains("Cat"));
    assert!(trie.contains("cat"));
    assert!(!trie.contains("CAT"));
    assert_eq!(trie.len(), 2);
}

#[test]
fn test_dictionary_from_word_list_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# extra words").unwrap();
    writeln!(file, "cattle").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "  Dover  ").unwrap();

    let config = DictionaryConfig {
        path: Some(file.path().to_path_buf()),
        ..DictionaryConfig::default()
    };
    let trie = Dictionary::from_config(&config).unwrap().build_trie();

    assert_eq!(trie.len(), WORDS.len() + 2);
    assert!(trie.contains("Dover"));
    assert_eq!(trie.words_with_prefix("cat"), vec!["cat", "cattle"]);
}

#[test]
fn test_missing_word_list_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = DictionaryConfig {
        path: Some(dir.path().join("missing.txt")),
        ..DictionaryConfig::default()
    };

    let err = Dictionary::from_config(&config).unwrap_err();
    assert!(matches!(err, DictionaryError::ReadError { .. }));
}

#[test]
fn test_default_loader_seeds_demo_words() {
    let config = ConfigLoader::new(None::<&str>, "KUPU_IT_DEFAULT").load().unwrap();
    let trie = Dictionary::from_config(&config.dictionary).unwrap().build_trie();
    assert_eq!(trie.words().count(), WORDS.len());
}
