//! The letter arrangement ("square") a puzzle is played on.
//!
//! Each of the four sides holds a set of letters, and every letter belongs
//! to exactly one side. The letter → side assignment is computed once at
//! construction so word validation is a table lookup per letter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SolveError;
use crate::letters::{letter_index, LetterSet, ALPHABET_SIZE};

/// Number of sides on a puzzle square.
pub const NUM_SIDES: usize = 4;

/// One edge of the square, in the order puzzle sources list them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; NUM_SIDES] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated four-sided letter arrangement.
#[derive(Clone, PartialEq, Eq)]
pub struct Square {
    /// Letters on each side, indexed by `Side::index`.
    sides: [LetterSet; NUM_SIDES],
    /// Side owning each letter, indexed by alphabet position.
    side_of: [Option<Side>; ALPHABET_SIZE],
    /// Union of all side letters.
    letters: LetterSet,
}

impl Square {
    /// Builds a square from the letters of each side, in top/right/bottom/left order.
    ///
    /// Letters are case-insensitive; repeating a letter within one side is harmless,
    /// but a letter on two different sides is rejected.
    pub fn new<S: AsRef<str>>(sides: [S; NUM_SIDES]) -> Result<Self, SolveError> {
        let mut side_sets = [LetterSet::EMPTY; NUM_SIDES];
        let mut side_of: [Option<Side>; ALPHABET_SIZE] = [None; ALPHABET_SIZE];

        for (side, text) in Side::ALL.into_iter().zip(sides.iter()) {
            let text = text.as_ref().trim();
            if text.is_empty() {
                return Err(SolveError::EmptySide(side));
            }

            for found in text.chars() {
                let Some(index) = letter_index(found) else {
                    return Err(SolveError::InvalidLetter { side, found });
                };

                match side_of[index] {
                    Some(owner) if owner != side => {
                        return Err(SolveError::AmbiguousSideAssignment {
                            letter: found.to_ascii_lowercase(),
                            first: owner,
                            second: side,
                        });
                    }
                    _ => {
                        side_of[index] = Some(side);
                        side_sets[side.index()].insert(found);
                    }
                }
            }
        }

        let letters = side_sets
            .iter()
            .fold(LetterSet::EMPTY, |all, &side| all.union(side));

        Ok(Self {
            sides: side_sets,
            side_of,
            letters,
        })
    }

    /// All letters on the square.
    #[inline]
    pub fn letters(&self) -> LetterSet {
        self.letters
    }

    /// The letters on one side.
    #[inline]
    pub fn side(&self, side: Side) -> LetterSet {
        self.sides[side.index()]
    }

    /// The side a letter sits on, or `None` if it is not on the square.
    #[inline]
    pub fn side_of(&self, letter: char) -> Option<Side> {
        letter_index(letter).and_then(|index| self.side_of[index])
    }

    /// Side letters as uppercase strings, in top/right/bottom/left order.
    pub fn side_strings(&self) -> [String; NUM_SIDES] {
        Side::ALL.map(|side| self.side(side).to_string().to_ascii_uppercase())
    }
}

/// Parses `"ABC-DEF-GHI-JKL"` (also accepts `,`, `/` or whitespace as separators).
impl FromStr for Square {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == '-' || c == ',' || c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match <[&str; NUM_SIDES]>::try_from(parts.as_slice()) {
            Ok(sides) => Square::new(sides),
            Err(_) => {
                // report the first side that is missing
                let missing = Side::ALL[parts.len().min(NUM_SIDES - 1)];
                Err(SolveError::EmptySide(missing))
            }
        }
    }
}

/// Displays as `"ABC-DEF-GHI-JKL"`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.side_strings().join("-"))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_assignment() {
        let square = Square::new(["abc", "DEF", "gHi", "jkl"]).unwrap();
        assert_eq!(square.side_of('a'), Some(Side::Top));
        assert_eq!(square.side_of('E'), Some(Side::Right));
        assert_eq!(square.side_of('h'), Some(Side::Bottom));
        assert_eq!(square.side_of('L'), Some(Side::Left));
        assert_eq!(square.side_of('z'), None);
        assert_eq!(square.letters().len(), 12);
    }

    #[test]
    fn test_letter_on_two_sides_is_rejected() {
        let err = Square::new(["abc", "def", "ghi", "jka"]).unwrap_err();
        assert_eq!(
            err,
            SolveError::AmbiguousSideAssignment {
                letter: 'a',
                first: Side::Top,
                second: Side::Left,
            }
        );
    }

    #[test]
    fn test_repeated_letter_on_same_side_is_allowed() {
        let square = Square::new(["aab", "def", "ghi", "jkl"]).unwrap();
        assert_eq!(square.side(Side::Top).to_string(), "ab");
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        assert_eq!(
            Square::new(["abc", "d3f", "ghi", "jkl"]).unwrap_err(),
            SolveError::InvalidLetter {
                side: Side::Right,
                found: '3',
            }
        );
        assert_eq!(
            Square::new(["abc", "def", "  ", "jkl"]).unwrap_err(),
            SolveError::EmptySide(Side::Bottom)
        );
    }

    #[test]
    fn test_parse_and_display() {
        let square: Square = "abc-def-ghi-jkl".parse().unwrap();
        assert_eq!(square.to_string(), "ABC-DEF-GHI-JKL");

        let spaced: Square = "ABC DEF, GHI / JKL".parse().unwrap();
        assert_eq!(spaced, square);

        assert_eq!(
            "ABC-DEF".parse::<Square>().unwrap_err(),
            SolveError::EmptySide(Side::Bottom)
        );
    }
}
