//! Error types for arrangement validation and solving.
//!
//! # Error Codes
//!
//! - E001: `InvalidDictionary` (dictionary absent or empty)
//! - E002: `NoPlayableWords` (no entry survives validation)
//! - E003: `NoCoveringChainFound` (search ended without full coverage)
//! - E004: `AmbiguousSideAssignment` (letter on more than one side)
//! - E005: `InvalidLetter` (non-letter character in the arrangement)
//! - E006: `EmptySide` (side with no letters)
//! - E007: `InvalidConfig` (search configuration out of range)
//! - E008: `InternalCoverageMismatch` (engine reported a chain that misses letters)

use serde::{Deserialize, Serialize};

use crate::square::Side;

/// Everything that can stop a solve from producing a full solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum SolveError {
    #[error("Dictionary is absent or empty")]
    InvalidDictionary,

    #[error("No dictionary word is playable on this arrangement")]
    NoPlayableWords,

    #[error("Search ended without finding a chain that covers every letter")]
    NoCoveringChainFound,

    #[error("Letter '{letter}' appears on both the {first} and {second} sides")]
    AmbiguousSideAssignment { letter: char, first: Side, second: Side },

    #[error("Invalid character '{found}' on the {side} side (only A-Z allowed)")]
    InvalidLetter { side: Side, found: char },

    #[error("The {0} side has no letters")]
    EmptySide(Side),

    #[error("Invalid search configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Chain {chain:?} was reported as a solution but misses letters \"{missing}\"")]
    InternalCoverageMismatch { chain: Vec<String>, missing: String },
}

impl SolveError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolveError::InvalidDictionary => "E001",
            SolveError::NoPlayableWords => "E002",
            SolveError::NoCoveringChainFound => "E003",
            SolveError::AmbiguousSideAssignment { .. } => "E004",
            SolveError::InvalidLetter { .. } => "E005",
            SolveError::EmptySide(_) => "E006",
            SolveError::InvalidConfig { .. } => "E007",
            SolveError::InternalCoverageMismatch { .. } => "E008",
        }
    }

    /// Returns a hint for fixing the input, where one exists.
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolveError::InvalidDictionary => Some("Pass a non-empty word list"),
            SolveError::NoPlayableWords => {
                Some("Check that the word list matches the puzzle's language and letters")
            }
            SolveError::NoCoveringChainFound => {
                Some("Raise --max-iterations or --max-chain-length, or use a larger word list")
            }
            SolveError::AmbiguousSideAssignment { .. } => {
                Some("Each letter may appear on exactly one side")
            }
            SolveError::InvalidLetter { .. } => Some("Sides may only contain letters A-Z"),
            SolveError::EmptySide(_) => Some("Every side needs at least one letter"),
            SolveError::InvalidConfig { .. } => None,
            SolveError::InternalCoverageMismatch { .. } => {
                Some("This is a solver bug; please report the puzzle and word list")
            }
        }
    }

    /// Whether this error indicates a bug rather than bad input or a hard puzzle.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self, SolveError::InternalCoverageMismatch { .. })
    }

    /// Formats the error with its code and help text on separate lines.
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self.help() {
            Some(help) => format!("{self} ({})\n  help: {help}", self.code()),
            None => format!("{self} ({})", self.code()),
        }
    }
}
