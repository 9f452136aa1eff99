//! Node implementation for the Kupu Trie.
//!
//! Each node owns up to 52 children, one per ASCII letter, stored in a fixed
//! array indexed by alphabet slot.

use std::fmt;

use super::alphabet::{slot_of, ALPHABET_SIZE};

/// A node in the Kupu Trie.
///
/// A node stands for the prefix spelled by the path from the root. Terminal
/// nodes mark prefixes that were inserted as words.
pub struct TrieNode {
    /// Children indexed by alphabet slot
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET_SIZE],

    /// Whether this node represents the end of a word
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: std::array::from_fn(|_| None),
            is_terminal: false,
        }
    }

    /// Whether the path to this node spells an inserted word.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Returns the child reached through `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        slot_of(c).and_then(|slot| self.children[slot].as_deref())
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Iterates over `(slot, child)` pairs in slot order.
    pub(crate) fn iter_children(&self) -> impl Iterator<Item = (usize, &TrieNode)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(slot, child)| child.as_deref().map(|node| (slot, node)))
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.iter_children().count())
            .finish()
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_empty() {
        let node = TrieNode::new();
        assert!(!node.is_terminal());
        assert!(node.is_leaf());
        assert!(node.child('a').is_none());
        assert_eq!(node.iter_children().count(), 0);
    }

    #[test]
    fn test_child_lookup_ignores_non_letters() {
        let mut node = TrieNode::new();
        node.children[slot_of('q').unwrap()] = Some(Box::new(TrieNode::new()));
        assert!(node.child('q').is_some());
        assert!(node.child('Q').is_none());
        assert!(node.child('?').is_none());
        assert!(!node.is_leaf());
    }

    #[test]
    fn test_debug_is_shallow() {
        let mut node = TrieNode::new();
        node.is_terminal = true;
        node.children[slot_of('a').unwrap()] = Some(Box::new(TrieNode::new()));
        node.children[slot_of('B').unwrap()] = Some(Box::new(TrieNode::new()));

        assert_eq!(format!("{node:?}"), "TrieNode { is_terminal: true, children: 2 }");
    }
}
