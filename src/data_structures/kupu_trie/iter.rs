//! Lazy prefix enumeration for the Kupu Trie.

use super::alphabet::char_at;
use super::node::TrieNode;

/// Iterator over the words below a prefix node, in depth-first order.
///
/// Children are visited in ascending code point order and a word is yielded
/// as soon as its terminal node is entered, so a word always comes before the
/// longer words that extend it. The path buffer is owned by the iterator.
#[derive(Debug)]
pub struct PrefixIter<'a> {
    /// Nodes on the current path paired with the next slot to visit
    stack: Vec<(&'a TrieNode, usize)>,

    /// Prefix followed by the characters taken below the start node
    path: String,

    /// Whether the start node itself still has to be yielded
    emit_start: bool,
}

impl<'a> PrefixIter<'a> {
    /// Creates an iterator rooted at `start`, the node reached by `prefix`.
    ///
    /// Passing `None` yields an empty iterator.
    pub(crate) fn new(start: Option<&'a TrieNode>, prefix: &str) -> Self {
        match start {
            Some(node) => Self {
                stack: vec![(node, 0)],
                path: prefix.to_string(),
                emit_start: node.is_terminal(),
            },
            None => Self {
                stack: Vec::new(),
                path: String::new(),
                emit_start: false,
            },
        }
    }
}

impl Iterator for PrefixIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emit_start {
            self.emit_start = false;
            return Some(self.path.clone());
        }

        loop {
            let frame = self.stack.last_mut()?;
            let node = frame.0;
            let next = node
                .iter_children()
                .find(|(slot, _)| *slot >= frame.1);

            match next {
                Some((slot, child)) => {
                    frame.1 = slot + 1;
                    self.path.push(char_at(slot));
                    self.stack.push((child, 0));
                    if child.is_terminal() {
                        return Some(self.path.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    // The start node contributed the prefix, not a character.
                    if !self.stack.is_empty() {
                        self.path.pop();
                    }
                }
            }
        }
    }
}

impl std::iter::FusedIterator for PrefixIter<'_> {}
