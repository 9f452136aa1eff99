//! Alphabet handling for the Kupu Trie.
//!
//! The trie stores words over the 52 ASCII letters. Uppercase letters occupy
//! slots `0..26` and lowercase letters slots `26..52`, so iterating slots in
//! order visits characters in ascending code point order.

/// Number of distinct letters a node can branch on.
pub const ALPHABET_SIZE: usize = 52;

/// Number of letters in one case.
const CASE_SIZE: usize = 26;

/// Letters tried when generating insertion and substitution edits.
///
/// Only lowercase letters are tried, even though the trie may hold uppercase
/// words.
pub const EDIT_LETTERS: std::ops::RangeInclusive<char> = 'a'..='z';

/// Returns the child slot for `c`, or `None` if `c` is not an ASCII letter.
#[inline]
pub fn slot_of(c: char) -> Option<usize> {
    match c {
        'A'..='Z' => Some(c as usize - 'A' as usize),
        'a'..='z' => Some(CASE_SIZE + (c as usize - 'a' as usize)),
        _ => None,
    }
}

/// Returns the character stored in `slot`.
///
/// # Panics
///
/// Panics if `slot >= ALPHABET_SIZE`.
#[inline]
pub fn char_at(slot: usize) -> char {
    assert!(slot < ALPHABET_SIZE, "slot {slot} out of range");
    if slot < CASE_SIZE {
        (b'A' + slot as u8) as char
    } else {
        (b'a' + (slot - CASE_SIZE) as u8) as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_are_in_code_point_order() {
        let chars: Vec<char> = (0..ALPHABET_SIZE).map(char_at).collect();
        let mut sorted = chars.clone();
        sorted.sort_unstable();
        assert_eq!(chars, sorted);
        assert_eq!(chars.first(), Some(&'A'));
        assert_eq!(chars.last(), Some(&'z'));
    }

    #[test]
    fn test_slot_round_trip() {
        for slot in 0..ALPHABET_SIZE {
            assert_eq!(slot_of(char_at(slot)), Some(slot));
        }
    }

    #[test]
    fn test_cases_are_distinct() {
        assert_ne!(slot_of('c'), slot_of('C'));
    }

    #[test]
    fn test_non_letters_have_no_slot() {
        for c in ['0', '-', ' ', '@', '[', '`', '{', 'é', 'ß'] {
            assert_eq!(slot_of(c), None, "{c:?} should be outside the alphabet");
        }
    }
}
