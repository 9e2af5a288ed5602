//! Where puzzles come from.
//!
//! The solver only needs a square, a dictionary and (for display) the
//! puzzle's reference solution. `PuzzleSource` is the seam for anything that
//! supplies them; this module ships a reader for saved game-data JSON
//! documents, an in-memory source, and a plain word-list loader.
//!
//! Game-data documents look like:
//!
//! ```json
//! { "sides": ["ABC", "DEF", "GHI", "JKL"],
//!   "ourSolution": ["AGBHCI", "IJDKELF"],
//!   "dictionary": ["AGBHCI", "IJDKELF", "..."] }
//! ```
//!
//! Older documents carry the word list under `validWords` instead; failing
//! both, the first large array of strings is used.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::SolveError;
use crate::square::{Square, NUM_SIDES};

/// Keys checked for the word list, in order.
const DICTIONARY_KEYS: [&str; 2] = ["dictionary", "validWords"];

/// Arrays shorter than this are not mistaken for a word list.
const MIN_GUESSED_DICTIONARY_LEN: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Puzzle data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed game data: {0}")]
    Json(#[from] serde_json::Error),
}

/// One day's puzzle: its sides, the publisher's solution, and its word list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Side letters in top/right/bottom/left order.
    pub sides: [String; NUM_SIDES],
    pub reference_solution: Vec<String>,
    /// `None` when the source had no usable word list.
    pub dictionary: Option<Vec<String>>,
}

impl Puzzle {
    /// Validates the sides into a square.
    pub fn square(&self) -> Result<Square, SolveError> {
        Square::new(self.sides.clone())
    }
}

/// Anything that can supply today's puzzle.
pub trait PuzzleSource {
    fn fetch(&self) -> Result<Puzzle, SourceError>;
}

/// A puzzle held in memory.
#[derive(Clone, Debug)]
pub struct StaticSource {
    pub puzzle: Puzzle,
}

impl PuzzleSource for StaticSource {
    fn fetch(&self) -> Result<Puzzle, SourceError> {
        Ok(self.puzzle.clone())
    }
}

/// A game-data JSON document on disk, re-read on every fetch.
#[derive(Clone, Debug)]
pub struct GameDataFile {
    pub path: PathBuf,
}

impl GameDataFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PuzzleSource for GameDataFile {
    fn fetch(&self) -> Result<Puzzle, SourceError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_game_data(&contents)
    }
}

/// Parses a game-data JSON document.
pub fn parse_game_data(contents: &str) -> Result<Puzzle, SourceError> {
    let data: Value = serde_json::from_str(contents)?;
    let Some(fields) = data.as_object() else {
        return Err(SourceError::DataUnavailable(
            "game data is not a JSON object".to_string(),
        ));
    };

    let sides = match fields.get("sides").and_then(string_list) {
        Some(sides) => <[String; NUM_SIDES]>::try_from(sides).map_err(|sides| {
            SourceError::DataUnavailable(format!(
                "expected {NUM_SIDES} sides, found {}",
                sides.len()
            ))
        })?,
        None => {
            return Err(SourceError::DataUnavailable(
                "game data has no list of sides".to_string(),
            ))
        }
    };

    let reference_solution = fields
        .get("ourSolution")
        .and_then(string_list)
        .unwrap_or_default();

    Ok(Puzzle {
        sides,
        reference_solution,
        dictionary: find_dictionary(fields),
    })
}

/// Locates the word list among the game-data fields.
fn find_dictionary(fields: &serde_json::Map<String, Value>) -> Option<Vec<String>> {
    for key in DICTIONARY_KEYS {
        if let Some(value) = fields.get(key) {
            debug!("Using game data field '{key}' as dictionary");
            let words = string_list(value);
            if words.is_none() {
                warn!("Game data field '{key}' is not a list of words");
            }
            return words;
        }
    }

    // last resort: any large array of words
    fields.iter().find_map(|(key, value)| {
        let words = value
            .as_array()
            .filter(|items| items.len() >= MIN_GUESSED_DICTIONARY_LEN)
            .and_then(|_| string_list(value))?;
        warn!("No dictionary field in game data; guessing '{key}' ({} items)", words.len());
        Some(words)
    })
}

/// Converts a JSON array to strings, coercing numbers.
///
/// Returns `None` if the value is not an array or holds anything else.
fn string_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| match item {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        })
        .collect()
}

/// Loads a word list with one word per line.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<String>, SourceError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_word_list(&contents))
}

/// Parses word-list contents; see [`load_word_list`].
pub fn parse_word_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
