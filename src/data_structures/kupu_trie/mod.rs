//! Kupu Trie Implementation
//!
//! This module provides a case-sensitive prefix tree over the 52 ASCII
//! letters with exact lookup, prefix enumeration for autocomplete and word
//! prediction, and single-edit spelling suggestions.
//!
//! # Example
//!
//! ```
//! use kupu_lib::data_structures::{KupuTrie, SpellCheck};
//!
//! let mut trie = KupuTrie::new();
//! for word in ["cat", "car", "cart", "cake"] {
//!     trie.insert(word);
//! }
//!
//! assert!(trie.contains("cart"));
//! assert!(!trie.contains("Cart"));
//! assert_eq!(trie.words_with_prefix("ca"), vec!["cake", "car", "cart", "cat"]);
//! assert_eq!(
//!     trie.suggest_corrections("kat"),
//!     SpellCheck::Misspelled(vec!["cat".to_string()])
//! );
//! ```

mod alphabet;
mod edits;
mod iter;
mod node;

use std::fmt;

pub use alphabet::{char_at, slot_of, ALPHABET_SIZE};
pub use edits::Edits;
pub use iter::PrefixIter;
pub use node::TrieNode;

/// Outcome of a spell check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpellCheck {
    /// The word is in the trie.
    Correct,

    /// The word is not in the trie; holds every single-edit variant that is,
    /// in generation order and with duplicates kept.
    Misspelled(Vec<String>),
}

impl SpellCheck {
    /// Returns true if the checked word was found.
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Returns the suggested corrections, empty for a correct word.
    pub fn suggestions(&self) -> &[String] {
        match self {
            Self::Correct => &[],
            Self::Misspelled(suggestions) => suggestions,
        }
    }
}

/// Kupu Trie is a case-sensitive prefix tree for word lookup, completion and
/// spelling suggestions.
///
/// Key features:
/// * Fixed 52-slot child arrays, one slot per ASCII letter
/// * Deterministic enumeration in ascending code point order
/// * Characters outside the alphabet are skipped on insert and fail lookups
/// * Iterative teardown so deep tries never exhaust the call stack
pub struct KupuTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of distinct words inserted
    len: usize,

    /// Number of nodes, including the root
    node_count: usize,
}

impl KupuTrie {
    /// Creates a new empty `KupuTrie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
            node_count: 1,
        }
    }

    /// Inserts a word into the trie.
    ///
    /// Characters outside the 52-letter alphabet are skipped: they create no
    /// level and do not advance the position, so `"ca-t"` stores `"cat"`.
    /// Inserting an empty word marks the root terminal.
    ///
    /// # Returns
    ///
    /// `true` if the word was not present before, `false` otherwise.
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let mut created = 0;
        let mut node = &mut self.root;

        for c in word.as_ref().chars() {
            let Some(slot) = slot_of(c) else {
                continue;
            };
            node = node.children[slot]
                .get_or_insert_with(|| {
                    created += 1;
                    Box::new(TrieNode::new())
                })
                .as_mut();
        }

        let is_new = !node.is_terminal;
        node.is_terminal = true;

        self.node_count += created;
        if is_new {
            self.len += 1;
        }
        is_new
    }

    /// Checks if a word was inserted into the trie.
    ///
    /// Lookup is case-sensitive and fails on the first character that is
    /// outside the alphabet or has no child.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.find_node(word.as_ref())
            .is_some_and(TrieNode::is_terminal)
    }

    /// Returns the node reached by following `prefix` from the root.
    pub fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }

    /// Collects every word starting with `prefix`.
    ///
    /// Words come in depth-first order with children visited in ascending
    /// code point order (`'A'..='Z'` before `'a'..='z'`). A word is listed
    /// before the words that extend it. An unknown prefix yields an empty
    /// vector.
    pub fn words_with_prefix<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        self.prefix_iter(prefix).collect()
    }

    /// Lazily iterates over every word starting with `prefix`.
    ///
    /// Yields the same words in the same order as [`KupuTrie::words_with_prefix`].
    pub fn prefix_iter<P>(&self, prefix: P) -> PrefixIter<'_>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        PrefixIter::new(self.find_node(prefix), prefix)
    }

    /// Lazily iterates over every word in the trie.
    pub fn words(&self) -> PrefixIter<'_> {
        self.prefix_iter("")
    }

    /// Streams the single-edit variants of `word` that are in the trie.
    ///
    /// Unlike [`KupuTrie::suggest_corrections`] this does not check whether
    /// `word` itself is present.
    pub fn corrections<'a>(&'a self, word: &str) -> impl Iterator<Item = String> + 'a {
        Edits::new(word).filter(move |candidate| self.contains(candidate))
    }

    /// Checks the spelling of `word`.
    ///
    /// # Returns
    ///
    /// * `SpellCheck::Correct` - If the word is in the trie.
    /// * `SpellCheck::Misspelled(suggestions)` - Otherwise, with every word one
    ///   insertion, deletion or substitution away. Only lowercase letters are
    ///   tried for insertions and substitutions.
    pub fn suggest_corrections<W>(&self, word: W) -> SpellCheck
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if self.contains(word) {
            return SpellCheck::Correct;
        }

        let suggestions: Vec<String> = self.corrections(word).collect();
        tracing::trace!(word, count = suggestions.len(), "generated spelling suggestions");
        SpellCheck::Misspelled(suggestions)
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes in the trie, including the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Clears all words from the trie.
    pub fn clear(&mut self) {
        Self::release(std::mem::take(&mut self.root));
        self.len = 0;
        self.node_count = 1;
    }

    /// Releases a subtree depth-first without recursion.
    fn release(root: TrieNode) {
        let mut pending: Vec<Box<TrieNode>> = root.children.into_iter().flatten().collect();

        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl Default for KupuTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for KupuTrie {
    fn drop(&mut self) {
        Self::release(std::mem::take(&mut self.root));
    }
}

impl fmt::Debug for KupuTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KupuTrie")
            .field("len", &self.len)
            .field("node_count", &self.node_count)
            .finish_non_exhaustive()
    }
}

impl<S: AsRef<str>> Extend<S> for KupuTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for KupuTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO_WORDS: [&str; 8] = ["cat", "car", "cart", "cake", "cell", "dog", "don", "dot"];

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = KupuTrie::new();

        // Test initial state
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);

        // Test insertion
        assert!(trie.insert("hello"));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.node_count(), 6);
        assert!(!trie.is_empty());

        // Test lookup
        assert!(trie.contains("hello"));
        assert!(!trie.contains("hell"));
        assert!(!trie.contains("helloo"));
        assert!(!trie.contains("HELLO"));

        // Re-insertion is a no-op
        assert!(!trie.insert("hello"));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.node_count(), 6);

        // Shared prefixes reuse nodes
        assert!(trie.insert("help"));
        assert_eq!(trie.node_count(), 7);

        trie.clear();
        assert!(trie.is_empty());
        assert!(!trie.contains("hello"));
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn test_trie_prefix_search() {
        let trie: KupuTrie = DEMO_WORDS.into_iter().collect();

        assert_eq!(trie.words_with_prefix("ca"), vec!["cake", "car", "cart", "cat"]);
        assert_eq!(trie.words_with_prefix("do"), vec!["dog", "don", "dot"]);
        assert_eq!(trie.words_with_prefix("cart"), vec!["cart"]);
        assert!(trie.words_with_prefix("xyz").is_empty());
        assert!(trie.words_with_prefix("cats").is_empty());
    }

    #[test]
    fn test_empty_word() {
        let mut trie = KupuTrie::new();
        assert!(!trie.contains(""));

        trie.insert("");
        assert!(trie.contains(""));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.words_with_prefix(""), vec![""]);
    }

    #[test]
    fn test_out_of_alphabet_characters() {
        let mut trie = KupuTrie::new();
        trie.insert("ca-t");

        // Skipped on insert...
        assert!(trie.contains("cat"));
        // ...but a lookup fails on them.
        assert!(!trie.contains("ca-t"));
        assert!(trie.words_with_prefix("c-").is_empty());

        // A word made only of skipped characters marks the root.
        trie.insert("123");
        assert!(trie.contains(""));
    }

    #[test]
    fn test_spell_check() {
        let trie: KupuTrie = DEMO_WORDS.into_iter().collect();

        assert_eq!(trie.suggest_corrections("cat"), SpellCheck::Correct);
        assert!(trie.suggest_corrections("cat").suggestions().is_empty());

        let result = trie.suggest_corrections("kat");
        assert!(!result.is_correct());
        assert_eq!(result.suggestions(), ["cat".to_string()]);

        let result = trie.suggest_corrections("ca");
        assert_eq!(result.suggestions(), ["car", "cat"].map(String::from));
    }

    #[test]
    fn test_deep_trie_drops() {
        let mut trie = KupuTrie::new();
        trie.insert("a".repeat(200_000));
        assert_eq!(trie.node_count(), 200_001);
        drop(trie);
    }

    #[test]
    fn test_deep_trie_enumerates() {
        let word = "a".repeat(200_000);
        let mut trie = KupuTrie::new();
        trie.insert(&word);

        let words = trie.words_with_prefix("");
        assert_eq!(words.len(), 1);
        assert_eq!(words[0], word);
        assert_eq!(trie.words_with_prefix("aaa"), vec![word.clone()]);

        let node = trie.find_node(&word[..199_999]).unwrap();
        assert!(format!("{node:?}").contains("children: 1"));
    }

    #[test]
    fn test_debug_is_shallow() {
        let trie: KupuTrie = ["abc"].into_iter().collect();
        let debug = format!("{trie:?}");
        assert!(debug.contains("len: 1"));
        assert!(debug.contains("node_count: 4"));
    }
}
