//! Letter Boxed Solver Library
//!
//! Finds the shortest chain of dictionary words that uses every letter of a
//! four-sided letter square, where consecutive letters of a word come from
//! different sides and each word starts with the last letter of the previous one.

pub mod config;
pub mod errors;
pub mod format;
pub mod index;
pub mod letters;
pub mod log;
pub mod persistence;
pub mod solver;
pub mod source;
pub mod square;
pub mod validate;

pub use config::SearchConfig;
pub use errors::SolveError;
pub use format::{SolveReport, SolveStatus};
pub use square::{Side, Square};

use index::WordIndex;

/// Solves `square` against `dictionary`.
///
/// Never panics on bad input: an empty dictionary, a dictionary with no
/// playable words, an invalid configuration or an unsolvable puzzle all come
/// back as a report with an empty or partial word list.
pub fn solve<S: AsRef<str>>(square: &Square, dictionary: &[S], config: &SearchConfig) -> SolveReport {
    if let Err(err) = config.validate() {
        return SolveReport::empty(err);
    }
    if dictionary.is_empty() {
        return SolveReport::empty(SolveError::InvalidDictionary);
    }

    let index = match WordIndex::build(dictionary, square) {
        Ok(index) => index,
        Err(err) => return SolveReport::empty(err),
    };

    let outcome = solver::search(&index, square, config);
    format::finish(&index, square, &outcome)
}

/// A preloaded dictionary and configuration that can solve many squares.
///
/// The dictionary is never mutated, so one `Solver` can be shared across
/// threads and used for independent puzzles concurrently.
#[derive(Clone, Debug)]
pub struct Solver {
    dictionary: Vec<String>,
    config: SearchConfig,
}

impl Solver {
    /// Creates a solver, rejecting configurations the search cannot run with.
    pub fn new(dictionary: Vec<String>, config: SearchConfig) -> Result<Self, SolveError> {
        config.validate()?;
        Ok(Self { dictionary, config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &[String] {
        &self.dictionary
    }

    /// Solves one square against the preloaded dictionary.
    pub fn solve(&self, square: &Square) -> SolveReport {
        solve(square, &self.dictionary, &self.config)
    }
}
