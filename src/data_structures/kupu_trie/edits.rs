//! Single-edit candidate generation for spelling suggestions.

use super::alphabet::EDIT_LETTERS;

/// Current position of the generator within the three edit classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Insert { pos: usize, letter: usize },
    Delete { pos: usize },
    Substitute { pos: usize, letter: usize },
    Done,
}

/// Iterator over every word one edit away from a source word.
///
/// Candidates come in a fixed order: all insertions, then all deletions,
/// then all substitutions. Within insertions and substitutions the position
/// is the outer loop and the letter the inner loop. Candidates are not
/// deduplicated and substitutions include replacing a letter by itself.
#[derive(Debug, Clone)]
pub struct Edits {
    chars: Vec<char>,
    letters: Vec<char>,
    phase: Phase,
}

impl Edits {
    /// Creates a generator for the edits of `word`.
    pub fn new(word: &str) -> Self {
        Self {
            chars: word.chars().collect(),
            letters: EDIT_LETTERS.collect(),
            phase: Phase::Insert { pos: 0, letter: 0 },
        }
    }

    /// Total number of candidates generated for a word of `len` characters.
    pub fn count_for(len: usize) -> usize {
        let letters = EDIT_LETTERS.count();
        letters * (len + 1) + len + letters * len
    }

    fn inserted(&self, pos: usize, c: char) -> String {
        let mut out = String::with_capacity(self.chars.len() + 1);
        out.extend(&self.chars[..pos]);
        out.push(c);
        out.extend(&self.chars[pos..]);
        out
    }

    fn deleted(&self, pos: usize) -> String {
        self.chars
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| (i != pos).then_some(c))
            .collect()
    }

    fn substituted(&self, pos: usize, c: char) -> String {
        self.chars
            .iter()
            .enumerate()
            .map(|(i, &orig)| if i == pos { c } else { orig })
            .collect()
    }

    /// Advances an inner letter loop, carrying into the position.
    fn step(&self, pos: usize, letter: usize) -> (usize, usize) {
        if letter + 1 == self.letters.len() {
            (pos + 1, 0)
        } else {
            (pos, letter + 1)
        }
    }
}

impl Iterator for Edits {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.chars.len();
        loop {
            match self.phase {
                Phase::Insert { pos, .. } if pos > len => {
                    self.phase = Phase::Delete { pos: 0 };
                }
                Phase::Insert { pos, letter } => {
                    let candidate = self.inserted(pos, self.letters[letter]);
                    let (pos, letter) = self.step(pos, letter);
                    self.phase = Phase::Insert { pos, letter };
                    return Some(candidate);
                }
                Phase::Delete { pos } if pos >= len => {
                    self.phase = Phase::Substitute { pos: 0, letter: 0 };
                }
                Phase::Delete { pos } => {
                    self.phase = Phase::Delete { pos: pos + 1 };
                    return Some(self.deleted(pos));
                }
                Phase::Substitute { pos, .. } if pos >= len => {
                    self.phase = Phase::Done;
                }
                Phase::Substitute { pos, letter } => {
                    let candidate = self.substituted(pos, self.letters[letter]);
                    let (pos, letter) = self.step(pos, letter);
                    self.phase = Phase::Substitute { pos, letter };
                    return Some(candidate);
                }
                Phase::Done => return None,
            }
        }
    }
}

impl std::iter::FusedIterator for Edits {}
