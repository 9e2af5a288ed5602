//! Word playability and coverage predicates.
//!
//! A word is playable on a square when every letter is on the square and no
//! two consecutive letters come from the same side. Letters may repeat, and a
//! side may be revisited as long as another side was used in between.

use crate::letters::LetterSet;
use crate::square::Square;

/// Returns `true` if `word` can be traced on `square`. Case-insensitive.
pub fn is_playable(word: &str, square: &Square) -> bool {
    let mut previous_side = None;
    let mut any_letter = false;

    for letter in word.chars() {
        let Some(side) = square.side_of(letter) else {
            return false;
        };
        if previous_side == Some(side) {
            return false;
        }
        previous_side = Some(side);
        any_letter = true;
    }

    any_letter
}

/// Returns `true` if `used` contains every letter on the square.
#[inline]
pub fn covers_all(used: LetterSet, square: &Square) -> bool {
    square.letters().is_subset(used)
}

/// Number of distinct letters in `word` not yet in `used`.
///
/// This is the greedy score the search uses to rank candidate next words.
#[inline]
pub fn priority(word: &str, used: LetterSet) -> usize {
    LetterSet::from_word(word).difference(used).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_square() -> Square {
        Square::new(["ABC", "DEF", "GHI", "JKL"]).unwrap()
    }

    #[test]
    fn test_playable_words() {
        let square = sample_square();
        // C(top) H(bottom) J(left) C(top)
        assert!(is_playable("CHJC", &square));
        // C(top) H(bottom) L(left) D(right)
        assert!(is_playable("CHLD", &square));
        assert!(is_playable("AGBHCI", &square));
        assert!(is_playable("IJDKELF", &square));
    }

    #[test]
    fn test_same_side_neighbours_are_rejected() {
        let square = sample_square();
        assert!(!is_playable("CHEF", &square), "E and F share the right side");
        assert!(!is_playable("BDE", &square), "D and E share the right side");
        assert!(!is_playable("ABC", &square));
        assert!(!is_playable("BAD", &square));
        assert!(!is_playable("AA", &square), "a doubled letter stays on its side");
    }

    #[test]
    fn test_letters_off_the_square_are_rejected() {
        let square = sample_square();
        assert!(!is_playable("XYZ", &square));
        assert!(!is_playable("AG-B", &square));
        assert!(!is_playable("", &square));
    }

    #[test]
    fn test_validation_is_case_insensitive() {
        let square = sample_square();
        for word in ["chjc", "ChJc", "CHJC", "cHjC"] {
            assert!(is_playable(word, &square), "{word} should be playable");
        }
        for word in ["chef", "Chef", "CHEF"] {
            assert!(!is_playable(word, &square), "{word} should not be playable");
        }
    }

    #[test]
    fn test_every_playable_pair_spans_two_sides() {
        let square = sample_square();
        for word in ["AGBHCI", "IJDKELF", "CHJC", "LAKE", "FIG"] {
            if !is_playable(word, &square) {
                continue;
            }
            let letters: Vec<char> = word.chars().collect();
            for pair in letters.windows(2) {
                assert_ne!(square.side_of(pair[0]), square.side_of(pair[1]), "{word}");
            }
        }
    }

    #[test]
    fn test_covers_all() {
        let square = sample_square();
        assert!(covers_all(LetterSet::from_word("ABCDEFGHIJKL"), &square));
        assert!(covers_all(LetterSet::from_word("abcdefghijklxyz"), &square));
        assert!(!covers_all(LetterSet::from_word("ABCDEF"), &square));
        assert!(!covers_all(LetterSet::EMPTY, &square));
    }

    #[test]
    fn test_priority_counts_new_letters() {
        let used = LetterSet::from_word("ABC");
        assert_eq!(priority("DEF", used), 3);
        assert_eq!(priority("ABD", used), 1);
        assert_eq!(priority("CAB", used), 0);
        assert_eq!(priority("deed", used), 2);
    }
}
