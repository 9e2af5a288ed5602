//! Compact letter sets for the 26 ASCII letters.
//!
//! A `LetterSet` is a `u32` bitmask where bit `i` is set when letter
//! `'a' + i` is present. Union, difference and subset tests are single
//! integer operations, which keeps the search loop free of hash sets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of letters a set can hold.
pub const ALPHABET_SIZE: usize = 26;

/// Converts a character to its 0-based alphabet index, ignoring case.
///
/// Returns `None` for anything outside `a..=z` / `A..=Z`.
#[inline(always)]
pub const fn letter_index(letter: char) -> Option<usize> {
    let lower = letter.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some(lower as usize - 'a' as usize)
    } else {
        None
    }
}

/// Converts a 0-based alphabet index back to a lowercase letter.
#[inline(always)]
pub const fn index_letter(index: usize) -> char {
    (b'a' + index as u8) as char
}

/// An unordered set of distinct letters.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    /// Builds the set of distinct letters in `text`.
    ///
    /// Characters that are not ASCII letters are skipped.
    pub fn from_word(text: &str) -> Self {
        text.chars()
            .filter_map(letter_index)
            .fold(Self::EMPTY, |set, index| Self(set.0 | 1 << index))
    }

    #[inline]
    pub fn insert(&mut self, letter: char) -> bool {
        match letter_index(letter) {
            Some(index) => {
                let fresh = self.0 & (1 << index) == 0;
                self.0 |= 1 << index;
                fresh
            }
            None => false,
        }
    }

    #[inline]
    pub fn contains(self, letter: char) -> bool {
        letter_index(letter).is_some_and(|index| self.0 & (1 << index) != 0)
    }

    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters in `self` that are not in `other`.
    #[inline]
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    pub fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the letters in alphabetical order.
    pub fn iter(self) -> impl Iterator<Item = char> {
        (0..ALPHABET_SIZE)
            .filter(move |&index| self.0 & (1 << index) != 0)
            .map(index_letter)
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

/// Displays the sorted letters as one lowercase string, e.g. `"abcz"`.
impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LetterSet({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_word_ignores_case_and_noise() {
        let set = LetterSet::from_word("Hello, World!");
        assert_eq!(set.to_string(), "dehlorw");
        assert_eq!(set.len(), 7);
    }

    #[test]
    fn test_letter_index_bounds() {
        assert_eq!(letter_index('a'), Some(0));
        assert_eq!(letter_index('Z'), Some(25));
        assert_eq!(letter_index('é'), None);
        assert_eq!(letter_index('1'), None);
    }

    #[test]
    fn test_set_algebra() {
        let abc = LetterSet::from_word("abc");
        let cde = LetterSet::from_word("cde");

        assert_eq!(abc.union(cde).to_string(), "abcde");
        assert_eq!(abc.intersection(cde).to_string(), "c");
        assert_eq!(abc.difference(cde).to_string(), "ab");
        assert!(LetterSet::from_word("ba").is_subset(abc));
        assert!(!cde.is_subset(abc));
        assert!(LetterSet::EMPTY.is_subset(abc));
    }

    #[test]
    fn test_insert_reports_new_letters() {
        let mut set = LetterSet::EMPTY;
        assert!(set.insert('Q'));
        assert!(!set.insert('q'));
        assert!(!set.insert('-'));
        assert!(set.contains('q'));
        assert_eq!(set.len(), 1);
    }
}
