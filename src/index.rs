//! Playable-word index built from a raw dictionary.
//!
//! The index filters the dictionary down to words playable on one square and
//! precomputes everything the search touches in its hot loop:
//! - the playable words, ordered short and letter-dense first
//! - each word's distinct-letter set
//! - words grouped by first letter, keeping that order
//! - the first original spelling of each normalized word, for display

use std::cmp::Reverse;

use log::debug;
use rustc_hash::FxHashMap;

use crate::errors::SolveError;
use crate::letters::{letter_index, LetterSet, ALPHABET_SIZE};
use crate::square::Square;
use crate::validate::is_playable;

/// Position of a word in the index's sorted word list.
pub type WordId = u32;

/// Words shorter than this are never indexed.
pub const MIN_WORD_LENGTH: usize = 2;

/// Immutable lookup structures over the playable words of one square.
#[derive(Debug, Clone)]
pub struct WordIndex {
    /// Lowercase playable words, sorted by (length asc, distinct letters desc).
    words: Vec<String>,
    /// Distinct letters of each word, indexed by `WordId`.
    letters: Vec<LetterSet>,
    /// Word ids grouped by first letter, in `words` order.
    by_first_letter: [Vec<WordId>; ALPHABET_SIZE],
    /// Normalized word -> first spelling seen in the dictionary.
    original_case: FxHashMap<String, String>,
    /// Number of dictionary entries that were skipped.
    rejected: usize,
}

impl WordIndex {
    /// Filters `dictionary` against `square` and builds the index.
    ///
    /// Entries are matched case-insensitively; normalized duplicates are indexed
    /// once, keeping the first spelling for display. Returns
    /// `SolveError::NoPlayableWords` if nothing survives.
    pub fn build<S: AsRef<str>>(dictionary: &[S], square: &Square) -> Result<Self, SolveError> {
        let mut original_case: FxHashMap<String, String> = FxHashMap::default();
        let mut playable: Vec<(String, LetterSet)> = Vec::new();
        let mut rejected = 0;

        for entry in dictionary {
            let entry = entry.as_ref();
            let normalized = entry.to_lowercase();

            if normalized.chars().count() < MIN_WORD_LENGTH || !is_playable(&normalized, square) {
                rejected += 1;
                continue;
            }
            if original_case.contains_key(&normalized) {
                // duplicate spelling: first one wins
                continue;
            }

            original_case.insert(normalized.clone(), entry.to_string());
            let letters = LetterSet::from_word(&normalized);
            playable.push((normalized, letters));
        }

        debug!(
            "Indexed {} playable words out of {} dictionary entries",
            playable.len(),
            dictionary.len()
        );

        if playable.is_empty() {
            return Err(SolveError::NoPlayableWords);
        }

        // stable: equal keys keep dictionary order
        playable.sort_by_key(|(word, letters)| (word.len(), Reverse(letters.len())));

        let mut by_first_letter: [Vec<WordId>; ALPHABET_SIZE] = Default::default();
        let mut words = Vec::with_capacity(playable.len());
        let mut letters = Vec::with_capacity(playable.len());

        for (id, (word, word_letters)) in playable.into_iter().enumerate() {
            // playable words are non-empty and made of square letters
            if let Some(first) = word.chars().next().and_then(letter_index) {
                by_first_letter[first].push(id as WordId);
            }
            words.push(word);
            letters.push(word_letters);
        }

        Ok(Self {
            words,
            letters,
            by_first_letter,
            original_case,
            rejected,
        })
    }

    /// Number of playable words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of dictionary entries that were not playable or too short.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Playable words in search order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    pub fn word(&self, id: WordId) -> &str {
        &self.words[id as usize]
    }

    #[inline]
    pub fn letters(&self, id: WordId) -> LetterSet {
        self.letters[id as usize]
    }

    /// Last letter of a word; the next word in a chain must start with it.
    #[inline]
    pub fn last_letter(&self, id: WordId) -> char {
        // words are ASCII and at least MIN_WORD_LENGTH long
        self.words[id as usize].as_bytes()[self.words[id as usize].len() - 1] as char
    }

    /// Playable words beginning with `letter`, in search order.
    pub fn starting_with(&self, letter: char) -> &[WordId] {
        match letter_index(letter) {
            Some(index) => &self.by_first_letter[index],
            None => &[],
        }
    }

    /// The spelling a normalized word had in the dictionary.
    pub fn original(&self, word: &str) -> Option<&str> {
        self.original_case.get(word).map(String::as_str)
    }

    /// Iterates all word ids in search order.
    pub fn ids(&self) -> impl Iterator<Item = WordId> {
        0..self.words.len() as WordId
    }
}
