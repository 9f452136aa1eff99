//! Data structures for Kupu.
//!
//! This module contains the word trie and its supporting types. All
//! implementations are free of unsafe code.

pub mod kupu_trie;

// Re-export common data structures
pub use kupu_trie::{Edits, KupuTrie, PrefixIter, SpellCheck, TrieNode};
