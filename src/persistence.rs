//! Saving daily results and refreshing them once per calendar day.
//!
//! A store directory holds two files:
//! - `snapshot.json`: the latest [`Snapshot`], read back on startup
//! - `snapshot.txt`: the same snapshot rendered for humans
//!
//! [`DailyService`] owns the in-memory snapshot and the time of its last
//! refresh. It calls the solver as a plain function whenever the snapshot is
//! missing or belongs to an earlier day.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::errors::SolveError;
use crate::format::{format_report, SolveReport};
use crate::source::{PuzzleSource, SourceError};
use crate::square::{Square, NUM_SIDES};

const SNAPSHOT_JSON: &str = "snapshot.json";
const SNAPSHOT_TXT: &str = "snapshot.txt";

const SECONDS_PER_DAY: u64 = 86_400;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Invalid puzzle: {0}")]
    Puzzle(#[from] SolveError),

    #[error("No snapshot has been stored yet")]
    NoSnapshot,
}

/// Seconds since the Unix epoch; times before the epoch count as zero.
pub fn unix_seconds(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

/// Calendar day (UTC) as days since the Unix epoch.
pub fn day_number(time: SystemTime) -> u64 {
    unix_seconds(time) / SECONDS_PER_DAY
}

/// One day's puzzle together with the solver's answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Day the snapshot belongs to, see [`day_number`].
    pub day: u64,
    /// When the solver ran, in Unix seconds.
    pub refreshed_at: u64,
    /// Side letters in top/right/bottom/left order.
    pub sides: [String; NUM_SIDES],
    pub reference_solution: Vec<String>,
    pub report: SolveReport,
}

/// Formats a snapshot as human-readable text.
pub fn format_snapshot(snapshot: &Snapshot) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Day {} (refreshed at {})",
        snapshot.day, snapshot.refreshed_at
    );
    let _ = writeln!(
        output,
        "Reference solution: {}",
        snapshot.reference_solution.join(" ")
    );

    match Square::new(snapshot.sides.clone()) {
        Ok(square) => output.push_str(&format_report(&square, &snapshot.report)),
        // hand-edited snapshot; show what is there
        Err(_) => {
            let _ = writeln!(output, "Puzzle: {}", snapshot.sides.join("-"));
            for word in &snapshot.report.words {
                let _ = writeln!(output, "  {word}");
            }
        }
    }

    output
}

/// A directory holding the latest snapshot.
#[derive(Clone, Debug)]
pub struct ResultStore {
    dir: PathBuf,
}

impl ResultStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes both the JSON and the text form, creating the directory if needed.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| self.io_error(&self.dir, source))?;

        let text_path = self.dir.join(SNAPSHOT_TXT);
        fs::write(&text_path, format_snapshot(snapshot))
            .map_err(|source| self.io_error(&text_path, source))?;

        let json_path = self.dir.join(SNAPSHOT_JSON);
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&json_path, json).map_err(|source| self.io_error(&json_path, source))?;

        Ok(())
    }

    /// Reads the stored snapshot; `Ok(None)` if nothing has been saved.
    pub fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        let json_path = self.dir.join(SNAPSHOT_JSON);
        let contents = match fs::read_to_string(&json_path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(&json_path, source)),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn io_error(&self, path: &Path, source: io::Error) -> StoreError {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Keeps one solved puzzle per calendar day.
pub struct DailyService<S> {
    source: S,
    store: ResultStore,
    config: SearchConfig,
    snapshot: Option<Snapshot>,
    last_refresh: Option<SystemTime>,
}

impl<S: PuzzleSource> DailyService<S> {
    /// Creates the service, picking up any snapshot already in the store.
    ///
    /// An unreadable stored snapshot is ignored and replaced on the next refresh.
    pub fn new(source: S, store: ResultStore, config: SearchConfig) -> Self {
        let snapshot = match store.load() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("Ignoring stored snapshot in {}: {err}", store.dir().display());
                None
            }
        };

        Self {
            source,
            store,
            config,
            snapshot,
            last_refresh: None,
        }
    }

    /// The cached snapshot, whatever day it is for.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// When this service last ran the solver.
    pub fn last_refresh(&self) -> Option<SystemTime> {
        self.last_refresh
    }

    /// Whether the cached snapshot is missing or from a day before `now`.
    pub fn is_stale(&self, now: SystemTime) -> bool {
        self.snapshot
            .as_ref()
            .map_or(true, |snapshot| snapshot.day != day_number(now))
    }

    /// Today's snapshot, refreshing first if the cached one is stale.
    pub fn current(&mut self, now: SystemTime) -> Result<&Snapshot, StoreError> {
        if self.is_stale(now) {
            self.refresh(now)?;
        }
        self.snapshot.as_ref().ok_or(StoreError::NoSnapshot)
    }

    /// Fetches the puzzle, solves it, saves the result, and caches it.
    ///
    /// On failure the previous snapshot stays in place.
    pub fn refresh(&mut self, now: SystemTime) -> Result<&Snapshot, StoreError> {
        let puzzle = self.source.fetch()?;
        let square = puzzle.square()?;

        let dictionary = puzzle.dictionary.as_deref().unwrap_or_default();
        let report = crate::solve(&square, dictionary, &self.config);
        info!(
            "Solved {square}: {} word(s) after {} iterations",
            report.words.len(),
            report.iterations
        );

        let snapshot = Snapshot {
            day: day_number(now),
            refreshed_at: unix_seconds(now),
            sides: puzzle.sides,
            reference_solution: puzzle.reference_solution,
            report,
        };
        self.store.save(&snapshot)?;

        self.last_refresh = Some(now);
        Ok(&*self.snapshot.insert(snapshot))
    }
}
