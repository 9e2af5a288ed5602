//! Turns search results into reports for callers.
//!
//! Restores the dictionary's original spelling, re-checks coverage of
//! complete solutions, and renders reports as text.

use std::fmt::Write;

use log::error;
use serde::{Deserialize, Serialize};

use crate::errors::SolveError;
use crate::index::{WordId, WordIndex};
use crate::letters::LetterSet;
use crate::solver::{Found, SearchOutcome};
use crate::square::Square;

/// How a solve ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolveStatus {
    /// The words chain and cover every letter.
    Solved,
    /// A single best-effort word; `missing` lists the uncovered letters.
    Partial { missing: String },
    /// No words to return.
    Empty { reason: SolveError },
    /// The engine broke an invariant; `words` is empty.
    Failed { error: SolveError },
}

/// Words found for one square, in play order, plus how the solve ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    pub words: Vec<String>,
    pub status: SolveStatus,
    /// States the search examined; zero when it never ran.
    pub iterations: usize,
}

impl SolveReport {
    /// A report with no words.
    pub fn empty(reason: SolveError) -> Self {
        Self {
            words: Vec::new(),
            status: SolveStatus::Empty { reason },
            iterations: 0,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.status == SolveStatus::Solved
    }

    pub fn is_partial(&self) -> bool {
        matches!(self.status, SolveStatus::Partial { .. })
    }
}

/// Maps a chain of word ids to the spellings first seen in the dictionary.
pub fn restore_case(index: &WordIndex, chain: &[WordId]) -> Vec<String> {
    chain
        .iter()
        .map(|&id| {
            let word = index.word(id);
            index.original(word).unwrap_or(word).to_string()
        })
        .collect()
}

/// Distinct letters used across `words`, ignoring case.
pub fn letters_used<S: AsRef<str>>(words: &[S]) -> LetterSet {
    words
        .iter()
        .fold(LetterSet::EMPTY, |used, word| {
            used.union(LetterSet::from_word(word.as_ref()))
        })
}

/// Checks that `words` together use every letter on the square.
pub fn verify_coverage<S: AsRef<str>>(words: &[S], square: &Square) -> Result<(), SolveError> {
    let missing = square.letters().difference(letters_used(words));
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SolveError::InternalCoverageMismatch {
            chain: words.iter().map(|word| word.as_ref().to_string()).collect(),
            missing: missing.to_string(),
        })
    }
}

/// Builds the caller-facing report for a finished search.
pub fn finish(index: &WordIndex, square: &Square, outcome: &SearchOutcome) -> SolveReport {
    let (words, status) = match &outcome.found {
        Found::Solution(chain) => {
            let words = restore_case(index, chain);
            match verify_coverage(&words, square) {
                Ok(()) => (words, SolveStatus::Solved),
                Err(err) => {
                    error!("{}", err.display_detailed());
                    (Vec::new(), SolveStatus::Failed { error: err })
                }
            }
        }
        Found::Partial(id) => {
            let words = restore_case(index, &[*id]);
            let missing = square.letters().difference(letters_used(&words));
            (
                words,
                SolveStatus::Partial {
                    missing: missing.to_string(),
                },
            )
        }
        Found::Nothing => (
            Vec::new(),
            SolveStatus::Empty {
                reason: SolveError::NoCoveringChainFound,
            },
        ),
    };

    SolveReport {
        words,
        status,
        iterations: outcome.iterations,
    }
}

/// Renders a report as plain text, one word per line.
pub fn format_report(square: &Square, report: &SolveReport) -> String {
    let mut output = String::new();
    // writing to a String cannot fail
    let _ = writeln!(output, "Puzzle: {square}");

    let _ = match &report.status {
        SolveStatus::Solved => writeln!(output, "Status: solved in {} words", report.words.len()),
        SolveStatus::Partial { missing } => writeln!(
            output,
            "Status: partial, missing {}",
            missing.to_ascii_uppercase()
        ),
        SolveStatus::Empty { reason } => {
            writeln!(output, "Status: no result ({}: {reason})", reason.code())
        }
        SolveStatus::Failed { error } => {
            writeln!(output, "Status: internal error ({}: {error})", error.code())
        }
    };

    for (i, word) in report.words.iter().enumerate() {
        let _ = writeln!(output, "  {}. {word}", i + 1);
    }

    output
}
